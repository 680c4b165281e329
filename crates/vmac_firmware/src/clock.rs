//! Cycle source backed by the machine cycle counter CSR.

use riscv::register::mcycle;
use vmac_core::clock::CycleSource;

/// Reads `mcycle` for cycle-accurate CPU path timing.
pub struct McycleClock;

impl CycleSource for McycleClock {
    fn now(&mut self) -> u64 {
        mcycle::read64()
    }
}
