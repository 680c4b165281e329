//! Per-run result records and verbatim report-line formatting.
//!
//! A report is produced once per benchmark run and never mutated. The
//! `Display` impls emit the exact line formats downstream tooling parses;
//! do not reword them. Result mismatches between the two paths are visible
//! in the RESULT line and are diagnostic only.

use core::fmt;

fn non_zero(cycles: u64) -> f64 {
    cycles.max(1) as f64
}

/// Equivalence record for one dot-mode run.
///
/// `cpu_result` keeps the full 64-bit accumulator; the accelerator's
/// scalar arrives truncated to 32 bits. Comparisons truncate the CPU value
/// the same way, while the report prints both as observed.
#[derive(Debug, Clone, Copy)]
pub struct DotReport {
    pub n: u32,
    pub rshift: u32,
    pub cpu_cycles: u64,
    pub acc_cycles: u64,
    pub cpu_result: i64,
    pub acc_result: i32,

    /// Set when a bounded poll gave up before done was observed; the rest
    /// of the record holds whatever the device last exposed.
    pub timed_out: bool,
}

impl DotReport {
    pub fn total_macs(&self) -> u64 {
        self.n as u64
    }

    pub fn speedup(&self) -> f64 {
        non_zero(self.cpu_cycles) / non_zero(self.acc_cycles)
    }

    pub fn cpu_throughput(&self) -> f64 {
        self.total_macs() as f64 / non_zero(self.cpu_cycles)
    }

    pub fn acc_throughput(&self) -> f64 {
        self.total_macs() as f64 / non_zero(self.acc_cycles)
    }

    /// Whether the accelerator scalar equals the truncated CPU reference.
    pub fn matched(&self) -> bool {
        self.cpu_result as i32 == self.acc_result
    }
}

impl fmt::Display for DotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BENCH, dot, n={}, rshift={}, cpu_cycles={}, acc_cycles={}, speedup={:.3}",
            self.n,
            self.rshift,
            self.cpu_cycles,
            self.acc_cycles,
            self.speedup()
        )?;
        writeln!(f, "RESULT, cpu={}, accel={}", self.cpu_result, self.acc_result)?;
        writeln!(
            f,
            "THROUGHPUT, cpu={:.6} MAC/cyc, accel={:.6} MAC/cyc",
            self.cpu_throughput(),
            self.acc_throughput()
        )?;
        write!(
            f,
            "ENERGY_EST, cpu={:.0}, accel={:.0} (arb units)",
            non_zero(self.cpu_cycles),
            non_zero(self.acc_cycles)
        )
    }
}

/// Equivalence record for one convolution run.
///
/// Only the first two outputs of each path are carried in the record; the
/// orchestrator compares the full output vector before folding it down.
#[derive(Debug, Clone, Copy)]
pub struct ConvReport {
    pub out_len: u32,
    pub klen: u32,
    pub rshift: u32,
    pub cpu_cycles: u64,
    pub acc_cycles: u64,
    pub y0_cpu: i32,
    pub y1_cpu: i32,
    pub y0_acc: i32,
    pub y1_acc: i32,

    /// Count of output indices where the paths disagreed.
    pub mismatches: u32,
    pub timed_out: bool,
}

impl ConvReport {
    pub fn total_macs(&self) -> u64 {
        self.out_len as u64 * self.klen as u64
    }

    pub fn speedup(&self) -> f64 {
        non_zero(self.cpu_cycles) / non_zero(self.acc_cycles)
    }

    pub fn cpu_throughput(&self) -> f64 {
        self.total_macs() as f64 / non_zero(self.cpu_cycles)
    }

    pub fn acc_throughput(&self) -> f64 {
        self.total_macs() as f64 / non_zero(self.acc_cycles)
    }

    pub fn matched(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for ConvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BENCH, conv, out_len={}, klen={}, rshift={}, cpu_cycles={}, acc_cycles={}, speedup={:.3}",
            self.out_len,
            self.klen,
            self.rshift,
            self.cpu_cycles,
            self.acc_cycles,
            self.speedup()
        )?;
        writeln!(
            f,
            "RESULT, y0_cpu={}, y1_cpu={}, y0_acc={}, y1_acc={}",
            self.y0_cpu, self.y1_cpu, self.y0_acc, self.y1_acc
        )?;
        writeln!(
            f,
            "THROUGHPUT, cpu={:.6} MAC/cyc, accel={:.6} MAC/cyc",
            self.cpu_throughput(),
            self.acc_throughput()
        )?;
        write!(
            f,
            "ENERGY_EST, cpu={:.0}, accel={:.0} (arb units)",
            non_zero(self.cpu_cycles),
            non_zero(self.acc_cycles)
        )
    }
}
