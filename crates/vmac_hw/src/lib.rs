//! Simulated hardware side of the accelerator stack.
//!
//! Hosts a cycle-accurate behavioral model of the vector MAC/conv
//! accelerator behind a Wishbone-style pin bundle, plus the bus-handshake
//! transport binding that drives those pins. Together they stand in for
//! the RTL simulation on machines without the real peripheral, so the
//! same driver and orchestrator code can be exercised against both
//! bindings. Only the externally observable register contract of the
//! model is normative; its internal timing is a modeling choice.

/// Bus-handshake transport binding over the model's pins.
pub mod handshake;

/// Clocked behavioral model of the accelerator.
pub mod model;

pub use handshake::HandshakeBus;
pub use model::{VectorMac, WishbonePins};
