//! Benchmark descriptors and their precondition checks.
//!
//! A descriptor is immutable for the duration of a run. Malformed
//! descriptors are undefined behavior at the register layer, so they are
//! rejected here, before any protocol interaction.

use crate::MacError;
use vmac_common::banks::BANK_WORDS;

/// Accelerator operating mode, selected by the control register mode bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single-scalar reduction over paired vectors.
    Dot,

    /// Sliding-window multiply-accumulate producing a vector of outputs.
    Conv,
}

/// Immutable per-run benchmark parameters.
#[derive(Debug, Clone, Copy)]
pub struct BenchDescriptor {
    pub mode: Mode,

    /// Element count in dot mode; output length in conv mode.
    pub len: u32,

    /// Kernel length. Zero in dot mode.
    pub klen: u32,

    /// Arithmetic right shift per product term, 0-31.
    pub shift: u32,
}

impl BenchDescriptor {
    pub fn dot(n: u32, shift: u32) -> Self {
        Self {
            mode: Mode::Dot,
            len: n,
            klen: 0,
            shift,
        }
    }

    pub fn conv(out_len: u32, klen: u32, shift: u32) -> Self {
        Self {
            mode: Mode::Conv,
            len: out_len,
            klen,
            shift,
        }
    }

    /// Number of samples preloaded into bank A.
    ///
    /// Conv mode loads `out_len + klen` samples, one more than the
    /// `out_len + klen - 1` the window arithmetic strictly needs; the
    /// generator and the hardware testbench both fill that extra slot.
    pub fn window_len(&self) -> u32 {
        match self.mode {
            Mode::Dot => self.len,
            Mode::Conv => self.len + self.klen,
        }
    }

    /// Number of samples loaded into bank B.
    pub fn kernel_len(&self) -> u32 {
        match self.mode {
            Mode::Dot => self.len,
            Mode::Conv => self.klen,
        }
    }

    /// Total multiply-accumulate operations one run performs.
    pub fn total_macs(&self) -> u64 {
        match self.mode {
            Mode::Dot => self.len as u64,
            Mode::Conv => self.len as u64 * self.klen as u64,
        }
    }

    /// Rejects descriptors the register layer treats as undefined.
    ///
    /// Zero lengths, shifts past 31 and operand sets that spill out of the
    /// fixed-size banks never reach the bus.
    pub fn validate(&self) -> Result<(), MacError> {
        if self.len == 0 {
            return Err(MacError::ZeroLength);
        }
        if self.mode == Mode::Conv && self.klen == 0 {
            return Err(MacError::ZeroKernel);
        }
        if self.shift > 31 {
            return Err(MacError::ShiftOutOfRange);
        }
        if self.window_len() > BANK_WORDS || self.kernel_len() > BANK_WORDS {
            return Err(MacError::BankOverflow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_descriptors_pass() {
        assert!(BenchDescriptor::dot(8, 15).validate().is_ok());
        assert!(BenchDescriptor::conv(4, 3, 15).validate().is_ok());
        assert!(BenchDescriptor::dot(1, 31).validate().is_ok());
    }

    #[test]
    fn zero_length_rejected() {
        assert_eq!(
            BenchDescriptor::dot(0, 15).validate(),
            Err(MacError::ZeroLength)
        );
        assert_eq!(
            BenchDescriptor::conv(0, 3, 15).validate(),
            Err(MacError::ZeroLength)
        );
    }

    #[test]
    fn zero_kernel_rejected() {
        assert_eq!(
            BenchDescriptor::conv(4, 0, 15).validate(),
            Err(MacError::ZeroKernel)
        );
    }

    #[test]
    fn oversized_shift_rejected() {
        assert_eq!(
            BenchDescriptor::dot(8, 32).validate(),
            Err(MacError::ShiftOutOfRange)
        );
    }

    #[test]
    fn bank_overflow_rejected() {
        assert_eq!(
            BenchDescriptor::dot(0x1001, 15).validate(),
            Err(MacError::BankOverflow)
        );
        // Window of 0x1000 + 8 samples does not fit bank A.
        assert_eq!(
            BenchDescriptor::conv(0x1000, 8, 15).validate(),
            Err(MacError::BankOverflow)
        );
    }

    #[test]
    fn mac_counts() {
        assert_eq!(BenchDescriptor::dot(1024, 15).total_macs(), 1024);
        assert_eq!(BenchDescriptor::conv(512, 64, 15).total_macs(), 512 * 64);
    }
}
