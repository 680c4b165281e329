//! Aggregates BENCH records from a captured log.

use anyhow::{Result, bail};
use vmac_io::{BenchKind, load_log};

/// Prints a per-benchmark comparison table for a log file.
pub fn summarize(log_path: &str) -> Result<()> {
    let records = load_log(log_path)?;
    if records.is_empty() {
        bail!("No BENCH lines found in {}", log_path);
    }

    println!(
        "{:<6} {:>18} {:>14} {:>14} {:>9}",
        "bench", "params", "cpu_cycles", "acc_cycles", "speedup"
    );
    for rec in &records {
        let params = match rec.kind {
            BenchKind::Dot { n } => format!("n={}", n),
            BenchKind::Conv { out_len, klen } => format!("out_len={} klen={}", out_len, klen),
        };
        println!(
            "{:<6} {:>18} {:>14} {:>14} {:>9.3}",
            rec.kind.name(),
            params,
            rec.cpu_cycles,
            rec.acc_cycles,
            rec.speedup
        );
    }

    let mean_speedup: f64 =
        records.iter().map(|r| r.speedup).sum::<f64>() / records.len() as f64;
    println!("Runs: {}", records.len());
    println!("Mean speedup: {:.3}", mean_speedup);
    Ok(())
}
