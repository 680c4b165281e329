//! Common definitions shared across the vector MAC accelerator system.
//!
//! This crate pins down the register and memory map of the fixed-function
//! vector multiply-accumulate / 1-D convolution accelerator. The same
//! constants are used by the bare-metal polled driver, the simulated
//! bus-handshake binding, and the behavioral device model, so they must
//! agree with the hardware memory map exactly.

#![no_std]

// Memory-mapped I/O address space for the SoC.
//
// The accelerator occupies a single peripheral window; everything inside
// the window is addressed in 32-bit words. These addresses are fixed for
// the lifetime of the system.
pub mod mmio {
    /// Base byte address of the accelerator peripheral window.
    ///
    /// All register and operand bank offsets below are word offsets from
    /// this base; the byte address of word `w` is `ACCEL_BASE + (w << 2)`.
    pub const ACCEL_BASE: usize = 0x3000_0000;

    /// Memory-mapped UART transmit register used by the firmware console.
    ///
    /// Standard address for the UART on QEMU's RISC-V virt platform.
    /// Writing a byte transmits it over the serial console.
    pub const UART0_BASE: usize = 0x1000_0000;

    /// Base address of main system RAM on the bare-metal target.
    pub const RAM_BASE: usize = 0x8000_0000;
}

/// Register word offsets and bit assignments for the accelerator.
///
/// The register file is write-only from the host side except STATUS and the
/// cycle counter halves, which are read-only and owned by the accelerator.
/// Status bits are set only by the device; control bits only by the host.
pub mod regs {
    /// Control register. bit0 start, bit1 clear, bit2 mode (0 = dot, 1 = conv).
    pub const CTRL: u32 = 0x00;

    /// Status register, read-only. bit0 busy, bit1 done.
    pub const STATUS: u32 = 0x01;

    /// Element count (dot mode) or output length (conv mode).
    pub const LENGTH: u32 = 0x02;

    /// Kernel length; meaningful in conv mode only, written as 0 for dot.
    pub const KLEN: u32 = 0x03;

    /// Low 32 bits of the elapsed-cycle counter.
    ///
    /// Meaningful only after the done bit has been observed; the full
    /// counter is `(CYCLES_HI << 32) | CYCLES_LO`.
    pub const CYCLES_LO: u32 = 0x04;

    /// High 32 bits of the elapsed-cycle counter.
    pub const CYCLES_HI: u32 = 0x05;

    /// Arithmetic right-shift applied to each product term, 0-31.
    pub const SCALE_SHIFT: u32 = 0x06;

    /// Control register bits. Written only by the host.
    pub mod ctrl {
        pub const START: u32 = 1 << 0;
        pub const CLEAR: u32 = 1 << 1;
        pub const MODE_CONV: u32 = 1 << 2;
    }

    /// Status register bits. Set only by the accelerator.
    pub mod status {
        pub const BUSY: u32 = 1 << 0;
        pub const DONE: u32 = 1 << 1;
    }
}

/// Operand bank word bases within the peripheral window.
///
/// Three contiguous word-indexed banks: two input vectors and one output.
/// Entry `i` of bank A lives at word offset `A_BASE + i`. Output entries
/// are defined only for indices below the configured output length, and
/// only after done has been observed.
pub mod banks {
    /// Input bank A: dot operand A, or the conv sliding-window sequence.
    pub const A_BASE: u32 = 0x1000;

    /// Input bank B: dot operand B, or the conv kernel.
    pub const B_BASE: u32 = 0x2000;

    /// Output bank O: `O[0]` holds the dot scalar; conv fills `O[0..out_len)`.
    pub const O_BASE: u32 = 0x3000;

    /// Capacity of each bank in 32-bit words.
    pub const BANK_WORDS: u32 = 0x1000;
}
