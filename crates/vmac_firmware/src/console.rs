//! UART console for firmware report output.
//!
//! Writes to the QEMU virt UART one byte at a time. The control unit is
//! single-hart, so no locking is needed; all output funnels through the
//! `println!` macro below.

use core::fmt;
use vmac_common::mmio::UART0_BASE;

/// UART device interface for formatted output.
///
/// Implements `fmt::Write` so report types can render themselves straight
/// to the serial console. Newlines are expanded to CRLF for terminal
/// compatibility.
pub struct Uart;

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let tx = UART0_BASE as *mut u8;
        for c in s.bytes() {
            unsafe {
                if c == b'\n' {
                    core::ptr::write_volatile(tx, b'\r');
                }
                core::ptr::write_volatile(tx, c);
            }
        }
        Ok(())
    }
}

/// Initializes the console subsystem.
///
/// A no-op on QEMU; kept for hardware that needs baud setup.
pub fn init() {}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use fmt::Write;
    let _ = Uart.write_fmt(args);
}

/// Prints a line to the serial console.
#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => ({
        $crate::console::_print(format_args!($($arg)*));
        $crate::console::_print(format_args!("\n"));
    });
}
pub use println;
