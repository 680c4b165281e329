//! Clocked behavioral model of the vector MAC/conv accelerator.
//!
//! The model reproduces the register contract the firmware driver and the
//! hardware testbench agree on: busy-then-done status transitions, a cycle
//! counter that runs while the engine is busy, one complete strobe/ack
//! exchange per bus access, and outputs truncated to 32 bits per entry.
//! It retires one multiply-accumulate per rising clock edge, which makes
//! cycle counts deterministic and strictly ordered by workload size.

use vmac_common::{banks, regs};

/// Wishbone-style pin bundle between the bus master and the model.
///
/// The master owns rst/cyc/stb/we/sel/adr/dat_w; the model owns dat_r and
/// ack. `sel` is accepted but ignored: the register window is word-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct WishbonePins {
    pub rst: bool,
    pub cyc: bool,
    pub stb: bool,
    pub we: bool,
    pub sel: u8,
    pub adr: u32,
    pub dat_w: u32,
    pub dat_r: u32,
    pub ack: bool,
}

/// Behavioral accelerator model with a two-phase clock.
pub struct VectorMac {
    pub pins: WishbonePins,
    clk: bool,

    // Register file.
    length: u32,
    klen: u32,
    shift: u32,
    mode_conv: bool,
    busy: bool,
    done: bool,
    cycles: u64,

    // Compute engine state, valid while busy.
    acc: i64,
    inner: u32,
    outer: u32,

    // One access served per strobe exchange.
    served: bool,

    mem_a: Vec<u32>,
    mem_b: Vec<u32>,
    mem_o: Vec<u32>,
}

impl VectorMac {
    /// Builds the model and runs the reset sequence (reset line held high
    /// across a few clock cycles, as the RTL testbench does).
    pub fn new() -> Self {
        let words = banks::BANK_WORDS as usize;
        let mut dev = Self {
            pins: WishbonePins {
                sel: 0xF,
                ..WishbonePins::default()
            },
            clk: false,
            length: 0,
            klen: 0,
            shift: 0,
            mode_conv: false,
            busy: false,
            done: false,
            cycles: 0,
            acc: 0,
            inner: 0,
            outer: 0,
            served: false,
            mem_a: vec![0; words],
            mem_b: vec![0; words],
            mem_o: vec![0; words],
        };
        dev.pins.rst = true;
        for _ in 0..3 {
            dev.cycle();
        }
        dev.pins.rst = false;
        dev
    }

    /// Advances exactly one half-clock phase.
    ///
    /// Sequential state updates on the rising edge only; the falling phase
    /// exists so a tracing wrapper could observe both levels.
    pub fn phase(&mut self) {
        self.clk = !self.clk;
        if self.clk {
            self.posedge();
        }
    }

    /// Advances one full clock cycle (two phases).
    pub fn cycle(&mut self) {
        self.phase();
        self.phase();
    }

    fn posedge(&mut self) {
        if self.pins.rst {
            self.length = 0;
            self.klen = 0;
            self.shift = 0;
            self.busy = false;
            self.done = false;
            self.cycles = 0;
            self.served = false;
            self.pins.ack = false;
            self.pins.dat_r = 0;
            return;
        }

        // The engine progresses autonomously, independent of bus traffic.
        if self.busy {
            self.cycles += 1;
            self.step_mac();
        }

        if self.pins.cyc && self.pins.stb {
            if !self.served {
                if self.pins.we {
                    self.bus_write(self.pins.adr, self.pins.dat_w);
                } else {
                    self.pins.dat_r = self.bus_read(self.pins.adr);
                }
                self.pins.ack = true;
                self.served = true;
            } else {
                self.pins.ack = false;
            }
        } else {
            self.pins.ack = false;
            self.served = false;
        }
    }

    fn step_mac(&mut self) {
        if self.mode_conv {
            let x = self.mem_a[(self.outer + self.inner) as usize] as i32;
            let k = self.mem_b[self.inner as usize] as i32;
            self.acc += (x as i64 * k as i64) >> self.shift;
            self.inner += 1;
            if self.inner == self.klen {
                self.mem_o[self.outer as usize] = self.acc as u32;
                self.acc = 0;
                self.inner = 0;
                self.outer += 1;
                if self.outer == self.length {
                    self.finish();
                }
            }
        } else {
            let a = self.mem_a[self.inner as usize] as i32;
            let b = self.mem_b[self.inner as usize] as i32;
            self.acc += (a as i64 * b as i64) >> self.shift;
            self.inner += 1;
            if self.inner == self.length {
                self.mem_o[0] = self.acc as u32;
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.busy = false;
        self.done = true;
    }

    fn start(&mut self, conv: bool) {
        // A start while busy is undefined at the register contract level;
        // the model ignores it so tests stay deterministic.
        if self.busy {
            return;
        }
        self.mode_conv = conv;
        self.done = false;
        self.cycles = 0;
        self.acc = 0;
        self.inner = 0;
        self.outer = 0;
        if self.length == 0 || (conv && self.klen == 0) {
            // Degenerate configuration: nothing to compute.
            self.done = true;
            return;
        }
        self.busy = true;
    }

    fn bus_write(&mut self, adr: u32, data: u32) {
        match adr {
            regs::CTRL => {
                if data & regs::ctrl::CLEAR != 0 {
                    self.busy = false;
                    self.done = false;
                    self.cycles = 0;
                }
                if data & regs::ctrl::START != 0 {
                    self.start(data & regs::ctrl::MODE_CONV != 0);
                }
            }
            regs::LENGTH if !self.busy => self.length = data,
            regs::KLEN if !self.busy => self.klen = data,
            regs::SCALE_SHIFT if !self.busy => self.shift = data & 0x1F,
            _ => {
                if let Some(slot) = self.bank_slot(adr) {
                    *slot = data;
                }
            }
        }
    }

    fn bus_read(&mut self, adr: u32) -> u32 {
        match adr {
            regs::STATUS => {
                let mut s = 0;
                if self.busy {
                    s |= regs::status::BUSY;
                }
                if self.done {
                    s |= regs::status::DONE;
                }
                s
            }
            regs::CYCLES_LO => self.cycles as u32,
            regs::CYCLES_HI => (self.cycles >> 32) as u32,
            _ => match self.bank_word(adr) {
                Some(word) => word,
                None => 0,
            },
        }
    }

    fn bank_slot(&mut self, adr: u32) -> Option<&mut u32> {
        let idx = (adr & (banks::BANK_WORDS - 1)) as usize;
        match adr & !(banks::BANK_WORDS - 1) {
            banks::A_BASE if !self.busy => Some(&mut self.mem_a[idx]),
            banks::B_BASE if !self.busy => Some(&mut self.mem_b[idx]),
            _ => None,
        }
    }

    fn bank_word(&self, adr: u32) -> Option<u32> {
        let idx = (adr & (banks::BANK_WORDS - 1)) as usize;
        match adr & !(banks::BANK_WORDS - 1) {
            banks::A_BASE => Some(self.mem_a[idx]),
            banks::B_BASE => Some(self.mem_b[idx]),
            banks::O_BASE => Some(self.mem_o[idx]),
            _ => None,
        }
    }
}

impl Default for VectorMac {
    fn default() -> Self {
        Self::new()
    }
}
