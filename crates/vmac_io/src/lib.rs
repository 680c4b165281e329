//! Report log ingestion for the benchmark stack.
//!
//! Benchmark runs (firmware over serial, or the host binary) emit the
//! fixed BENCH/RESULT/THROUGHPUT/ENERGY_EST line formats; this crate reads
//! captured logs back into structured records so results can be aggregated
//! and compared after the fact. Lines that are not BENCH lines are
//! ignored, so raw console captures can be fed in unfiltered.

/// Log-file loading.
pub mod loader;

/// nom parsers for the report line formats.
pub mod parser;

/// Parsed record types.
pub mod record;

pub use loader::load_log;
pub use record::{BenchKind, BenchRecord};
