//! Host-side cycle source.

use std::time::Instant;
use vmac_core::clock::CycleSource;

/// Wall-clock cycle proxy for the host CPU path.
///
/// Reports elapsed nanoseconds since construction, i.e. cycles at a
/// notional 1 GHz. Host-side speedup figures are therefore relative, not
/// cycle-exact; the bare-metal binding uses the real `mcycle` counter.
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl CycleSource for WallClock {
    fn now(&mut self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}
