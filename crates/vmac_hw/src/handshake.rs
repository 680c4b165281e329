//! Bus-handshake transport binding for the simulated accelerator.
//!
//! Each word access is one complete strobe/acknowledge exchange: assert
//! cyc and stb with address, data and byte-select, advance the two-phase
//! clock until the model acknowledges, then deassert and idle one cycle.
//! Reads and writes differ only in the write-enable line and the data
//! direction. A configurable maximum wait keeps automated runs from
//! spinning forever on a wedged device; an exhausted wait is counted and
//! the access completes with the last observed read data.

use crate::model::VectorMac;
use vmac_core::transport::Transport;

/// Cycle bound for one acknowledge wait, matching the RTL testbench.
pub const DEFAULT_MAX_WAIT: u64 = 1_000_000;

/// Transport binding that drives the model's Wishbone-style pins.
pub struct HandshakeBus {
    dev: VectorMac,
    max_wait: u64,
    timeouts: u64,
}

impl HandshakeBus {
    pub fn new(dev: VectorMac) -> Self {
        Self::with_max_wait(dev, DEFAULT_MAX_WAIT)
    }

    pub fn with_max_wait(dev: VectorMac, max_wait: u64) -> Self {
        Self {
            dev,
            max_wait,
            timeouts: 0,
        }
    }

    /// Number of accesses whose acknowledge wait was exhausted.
    ///
    /// Diagnostic only; the affected accesses completed with stale data.
    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }

    pub fn device(&self) -> &VectorMac {
        &self.dev
    }

    fn exchange(&mut self, adr: u32, we: bool, dat_w: u32) -> u32 {
        self.dev.pins.adr = adr;
        self.dev.pins.we = we;
        self.dev.pins.dat_w = dat_w;
        self.dev.pins.sel = 0xF;
        self.dev.pins.cyc = true;
        self.dev.pins.stb = true;

        let mut waited: u64 = 0;
        loop {
            self.dev.cycle();
            if self.dev.pins.ack {
                break;
            }
            waited += 1;
            if waited >= self.max_wait {
                self.timeouts += 1;
                break;
            }
        }
        let data = self.dev.pins.dat_r;

        self.dev.pins.cyc = false;
        self.dev.pins.stb = false;
        self.dev.pins.we = false;
        self.dev.cycle();
        data
    }
}

impl Transport for HandshakeBus {
    fn read_word(&mut self, word_addr: u32) -> u32 {
        self.exchange(word_addr, false, 0)
    }

    fn write_word(&mut self, word_addr: u32, data: u32) {
        self.exchange(word_addr, true, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vmac_common::banks;
    use vmac_core::transport::Transport;

    #[test]
    fn bank_write_is_readable_back() {
        let mut bus = HandshakeBus::new(VectorMac::new());
        bus.write_word(banks::A_BASE + 5, 0xDEAD_BEEF);
        assert_eq!(bus.read_word(banks::A_BASE + 5), 0xDEAD_BEEF);
        assert_eq!(bus.timeouts(), 0);
    }

    #[test]
    fn ack_drops_between_exchanges() {
        let mut bus = HandshakeBus::new(VectorMac::new());
        bus.write_word(banks::B_BASE, 7);
        assert!(!bus.device().pins.ack);
        assert_eq!(bus.read_word(banks::B_BASE), 7);
        assert!(!bus.device().pins.ack);
    }
}
