//! Transport abstraction over word-addressed register access.
//!
//! One logical protocol, two realizations: a bare-metal polled binding that
//! turns each call into a volatile access, and a clocked bus-handshake
//! binding that drives a simulated synchronous bus until it acknowledges.
//! The driver and orchestrator are written against this trait and must not
//! behave differently across bindings except in latency and timeout
//! handling.

/// Blocking word access into the accelerator's peripheral window.
///
/// Addresses are word offsets from the peripheral base; the binding owns
/// the translation to byte addresses or bus signals. Both operations are
/// total: they return only once the underlying medium has acknowledged.
/// A binding with a bounded wait (the simulated bus) counts exhausted
/// waits itself and completes the call with its last observed data.
pub trait Transport {
    fn read_word(&mut self, word_addr: u32) -> u32;

    fn write_word(&mut self, word_addr: u32, data: u32);
}
