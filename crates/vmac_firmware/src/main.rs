//! Bare-metal benchmark firmware for the vector MAC/conv accelerator.
//!
//! Boots on hart 0, runs the fixed dot-product and convolution benchmarks
//! over the polled register binding, and prints the reports on the serial
//! console. Operand buffers live on the boot stack and are sized per run;
//! there is no global scratch state.

#![no_std]
#![no_main]

use panic_halt as _;

mod bus;
mod clock;
mod console;

use bus::PolledBus;
use clock::McycleClock;
use vmac_common::mmio::ACCEL_BASE;
use vmac_core::bench;
use vmac_core::driver::AccelDriver;

use core::arch::global_asm;
global_asm!(include_str!("entry.S"));

const DOT_N: usize = 1024;
const CONV_OUT: usize = 512;
const CONV_KLEN: usize = 64;
const SHIFT: u32 = 15;

#[unsafe(no_mangle)]
pub extern "C" fn kmain() -> ! {
    console::init();
    console::println!("RISC-V SoC + Vector MAC/Conv Accelerator");
    console::println!("Mapped at ACCEL_BASE={:#010x}", ACCEL_BASE);

    let transport = unsafe { PolledBus::new(ACCEL_BASE) };
    let mut driver = AccelDriver::new(transport);
    let mut clk = McycleClock;

    let mut a = [0i32; DOT_N];
    let mut b = [0i32; DOT_N];
    match bench::run_dot(
        &mut driver,
        &mut clk,
        DOT_N as u32,
        SHIFT,
        &mut a,
        &mut b,
        None,
    ) {
        Ok(report) => console::println!("{}", report),
        Err(e) => console::println!("dot benchmark rejected: {}", e),
    }

    let mut x = [0i32; CONV_OUT + CONV_KLEN];
    let mut k = [0i32; CONV_KLEN];
    let mut y = [0i32; CONV_OUT];
    match bench::run_conv(
        &mut driver,
        &mut clk,
        CONV_OUT as u32,
        CONV_KLEN as u32,
        SHIFT,
        &mut x,
        &mut k,
        &mut y,
        None,
    ) {
        Ok(report) => console::println!("{}", report),
        Err(e) => console::println!("conv benchmark rejected: {}", e),
    }

    loop {
        unsafe { riscv::asm::wfi() };
    }
}
