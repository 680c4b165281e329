//! Bare-metal polled transport binding.
//!
//! Every word access is a single volatile load or store at
//! `base + (word_addr << 2)`; the memory system's own latency is the only
//! handshake. This binding has no timeout: if the accelerator wedges with
//! busy held high, an unbounded `wait_done` spins forever. Callers on the
//! bare-metal target accept that risk; bounded waiting belongs to the
//! simulated binding.

use core::sync::atomic::{Ordering, fence};
use vmac_core::transport::Transport;

/// Direct volatile register access at a fixed peripheral base.
pub struct PolledBus {
    base: *mut u32,
}

impl PolledBus {
    /// # Safety
    ///
    /// The accelerator's register window must be mapped at `base` for the
    /// lifetime of this binding, and nothing else may access it.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u32,
        }
    }
}

impl Transport for PolledBus {
    fn read_word(&mut self, word_addr: u32) -> u32 {
        let value = unsafe { self.base.add(word_addr as usize).read_volatile() };
        fence(Ordering::Acquire);
        value
    }

    fn write_word(&mut self, word_addr: u32, data: u32) {
        fence(Ordering::Release);
        unsafe { self.base.add(word_addr as usize).write_volatile(data) };
    }
}
