//! Loads captured benchmark logs into records.

use crate::parser;
use crate::record::BenchRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a log file and returns every BENCH record found, in file order.
///
/// Non-matching lines (RESULT/THROUGHPUT/ENERGY_EST, boot banners, noise
/// from a serial capture) are skipped, not errors.
pub fn load_log<P: AsRef<Path>>(path: P) -> Result<Vec<BenchRecord>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open log {}", path.as_ref().display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Ok((_, rec)) = parser::bench_line(line.trim()) {
            records.push(rec);
        }
    }
    Ok(records)
}
