//! Parsed benchmark records.

/// Which benchmark a BENCH line describes, with its size parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchKind {
    Dot { n: u64 },
    Conv { out_len: u64, klen: u64 },
}

impl BenchKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dot { .. } => "dot",
            Self::Conv { .. } => "conv",
        }
    }

    /// Multiply-accumulate operations the run performed.
    pub fn total_macs(&self) -> u64 {
        match *self {
            Self::Dot { n } => n,
            Self::Conv { out_len, klen } => out_len * klen,
        }
    }
}

/// One parsed BENCH line.
///
/// `speedup` is carried as printed rather than recomputed, so a summary
/// reproduces exactly what the run reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchRecord {
    pub kind: BenchKind,
    pub rshift: u64,
    pub cpu_cycles: u64,
    pub acc_cycles: u64,
    pub speedup: f64,
}
