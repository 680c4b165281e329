//! Binding-agnostic control logic for the vector MAC/conv accelerator.
//!
//! This crate contains everything that does not depend on how register
//! accesses reach the device: the deterministic operand generator, the CPU
//! reference kernels that define ground truth, the benchmark descriptor and
//! its preconditions, the register protocol state machine, and the benchmark
//! orchestrator with its report formatting. All modules are designed for use
//! in both firmware (no_std) and host-side simulation environments.

#![no_std]

/// Benchmark orchestration: one full CPU-vs-accelerator run per call.
///
/// Generates operands, times the CPU reference path, drives the accelerator
/// through the register protocol, and folds both results into an immutable
/// report. Buffers are caller-provided and sized per invocation; no global
/// scratch state exists.
pub mod bench;

/// Monotonic cycle counting capability.
///
/// Abstracts the platform cycle counter behind a trait so the orchestrator
/// can be timed with a real counter on hardware and a deterministic fake
/// in tests.
pub mod clock;

/// Benchmark descriptors and their caller-side precondition checks.
pub mod descriptor;

/// Register protocol state machine for the accelerator.
///
/// Sequences clear/configure/start/poll/read over an arbitrary transport
/// binding and refuses operations that would violate the register contract.
pub mod driver;

/// CPU reference kernels for dot-product and 1-D convolution.
///
/// These pure functions define the fixed-point ground truth the accelerator
/// is validated against; the shift/accumulate ordering here is normative.
pub mod kernel;

/// Deterministic operand vector generator.
pub mod pattern;

/// Per-run result records and verbatim report-line formatting.
pub mod report;

/// Transport abstraction over word-addressed register access.
pub mod transport;

/// Error type for precondition and protocol-ordering violations.
///
/// Result mismatches between the CPU and accelerator paths are deliberately
/// not represented here: they are diagnostic, always reported and never
/// raised as failures. The variants below are the conditions that must be
/// rejected before any register traffic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// The descriptor's element count or output length is zero.
    ZeroLength,

    /// Convolution mode with a zero-length kernel.
    ZeroKernel,

    /// The scale shift exceeds 31 and cannot be applied to a 32-bit lane.
    ShiftOutOfRange,

    /// A caller-provided buffer is shorter than the descriptor implies.
    ///
    /// For conv mode the window buffer must hold `out_len + klen` samples
    /// (the preloaded sliding-window sequence), and the output buffer must
    /// hold `out_len` entries.
    BufferTooSmall,

    /// A descriptor would not fit the accelerator's operand banks.
    BankOverflow,

    /// A driver operation was issued in a protocol state that forbids it,
    /// e.g. configure while running or start without configure.
    ProtocolOrder,
}

impl core::fmt::Display for MacError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "element count / output length must be non-zero"),
            Self::ZeroKernel => write!(f, "conv kernel length must be non-zero"),
            Self::ShiftOutOfRange => write!(f, "scale shift must be in 0..=31"),
            Self::BufferTooSmall => write!(f, "operand buffer shorter than descriptor requires"),
            Self::BankOverflow => write!(f, "descriptor exceeds operand bank capacity"),
            Self::ProtocolOrder => write!(f, "operation violates protocol state ordering"),
        }
    }
}

impl core::error::Error for MacError {}
