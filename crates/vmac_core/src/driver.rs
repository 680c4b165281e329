//! Register protocol state machine for the accelerator.
//!
//! The driver owns a transport binding and sequences the register contract:
//! `Idle -> Configured -> Running -> Done -> Idle` (via explicit clear).
//! Completion is discovered only by repeatedly reading the status register;
//! the device raises no interrupts. Ownership of the operand banks and the
//! control register transfers to the accelerator at `start` and returns to
//! the host once done has been observed, so every bank or counter access is
//! gated on the tracked state rather than trusted to the caller.

use crate::MacError;
use crate::descriptor::{BenchDescriptor, Mode};
use crate::transport::Transport;
use vmac_common::{banks, regs};

/// Host-side view of the protocol state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolState {
    Idle,
    Configured,
    Running,
    Done,
}

/// Protocol state machine over an arbitrary transport binding.
pub struct AccelDriver<T: Transport> {
    bus: T,
    state: ProtocolState,
    mode: Mode,
}

impl<T: Transport> AccelDriver<T> {
    /// Wraps a transport binding. The device is not assumed cleared; run
    /// `clear` before the first configure.
    pub fn new(bus: T) -> Self {
        Self {
            bus,
            state: ProtocolState::Idle,
            mode: Mode::Dot,
        }
    }

    pub fn state(&self) -> ProtocolState {
        self.state
    }

    /// Writes the clear bit, resetting status and returning to `Idle`.
    ///
    /// Legal from any state the host can observe; while `Running` the host
    /// never calls this (the orchestrator only reaches it after
    /// `wait_done`).
    pub fn clear(&mut self) {
        self.bus.write_word(regs::CTRL, regs::ctrl::CLEAR);
        self.state = ProtocolState::Idle;
    }

    /// Writes LENGTH, KLEN and SCALE_SHIFT for the coming run.
    ///
    /// Allowed only from `Idle` or `Configured`; a finished run must be
    /// cleared before it is reconfigured, and configuration writes while
    /// the accelerator is running are a protocol violation.
    pub fn configure(&mut self, desc: &BenchDescriptor) -> Result<(), MacError> {
        match self.state {
            ProtocolState::Idle | ProtocolState::Configured => {}
            _ => return Err(MacError::ProtocolOrder),
        }
        desc.validate()?;

        self.bus.write_word(regs::LENGTH, desc.len);
        self.bus.write_word(
            regs::KLEN,
            match desc.mode {
                Mode::Dot => 0,
                Mode::Conv => desc.klen,
            },
        );
        self.bus.write_word(regs::SCALE_SHIFT, desc.shift);
        self.mode = desc.mode;
        self.state = ProtocolState::Configured;
        Ok(())
    }

    /// Copies host samples into operand bank A.
    ///
    /// Bank ownership belongs to the host in every state except `Running`.
    pub fn load_a(&mut self, data: &[i32]) -> Result<(), MacError> {
        self.load_bank(banks::A_BASE, data)
    }

    /// Copies host samples into operand bank B.
    pub fn load_b(&mut self, data: &[i32]) -> Result<(), MacError> {
        self.load_bank(banks::B_BASE, data)
    }

    fn load_bank(&mut self, base: u32, data: &[i32]) -> Result<(), MacError> {
        if self.state == ProtocolState::Running {
            return Err(MacError::ProtocolOrder);
        }
        if data.len() as u32 > banks::BANK_WORDS {
            return Err(MacError::BankOverflow);
        }
        for (i, &word) in data.iter().enumerate() {
            self.bus.write_word(base + i as u32, word as u32);
        }
        Ok(())
    }

    /// Sets the start bit (plus the mode bit recorded at configure) and
    /// hands the banks over to the accelerator.
    ///
    /// Only legal from `Configured`; the state tracking makes a second
    /// start while running unreachable, which the register contract leaves
    /// undefined.
    pub fn start(&mut self) -> Result<(), MacError> {
        if self.state != ProtocolState::Configured {
            return Err(MacError::ProtocolOrder);
        }
        let mut ctrl = regs::ctrl::START;
        if self.mode == Mode::Conv {
            ctrl |= regs::ctrl::MODE_CONV;
        }
        self.bus.write_word(regs::CTRL, ctrl);
        self.state = ProtocolState::Running;
        Ok(())
    }

    /// Busy-polls STATUS until the done bit is observed.
    ///
    /// `None` polls forever, which is the bare-metal binding's contract: a
    /// stuck accelerator hangs the host. `Some(n)` gives up after `n`
    /// status reads and returns `false`; the driver still moves to `Done`
    /// so the caller can salvage whatever state the device last exposed.
    /// Returns `true` when done was observed.
    pub fn wait_done(&mut self, max_polls: Option<u64>) -> bool {
        if self.state != ProtocolState::Running {
            // Nothing in flight; done (or idle) is already observable.
            return self.state == ProtocolState::Done;
        }
        let mut polls: u64 = 0;
        loop {
            let status = self.bus.read_word(regs::STATUS);
            if status & regs::status::DONE != 0 {
                self.state = ProtocolState::Done;
                return true;
            }
            polls += 1;
            if let Some(bound) = max_polls
                && polls >= bound
            {
                self.state = ProtocolState::Done;
                return false;
            }
        }
    }

    /// Reads the reconstructed 64-bit elapsed-cycle counter.
    ///
    /// Meaningful only after done has been observed.
    pub fn read_cycles(&mut self) -> Result<u64, MacError> {
        if self.state != ProtocolState::Done {
            return Err(MacError::ProtocolOrder);
        }
        let lo = self.bus.read_word(regs::CYCLES_LO) as u64;
        let hi = self.bus.read_word(regs::CYCLES_HI) as u64;
        Ok((hi << 32) | lo)
    }

    /// Reads one word from the output bank.
    ///
    /// Output entries are defined only for indices below the configured
    /// output length, and only after done has been observed.
    pub fn read_output(&mut self, idx: u32) -> Result<u32, MacError> {
        if self.state != ProtocolState::Done {
            return Err(MacError::ProtocolOrder);
        }
        Ok(self.bus.read_word(banks::O_BASE + idx))
    }

    /// Raw status read, exposed for protocol-level tests.
    pub fn read_status(&mut self) -> u32 {
        self.bus.read_word(regs::STATUS)
    }

    /// Access to the underlying binding, e.g. for timeout diagnostics.
    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }
}
