mod bench;
mod clock;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dot-product benchmark against the simulated accelerator.
    Dot {
        #[arg(long, default_value_t = 1024)]
        n: u32,
        #[arg(long, default_value_t = 15)]
        shift: u32,
        #[arg(long, default_value_t = 1_000_000)]
        max_polls: u64,
    },
    /// 1-D convolution benchmark against the simulated accelerator.
    Conv {
        #[arg(long, default_value_t = 512)]
        out_len: u32,
        #[arg(long, default_value_t = 64)]
        klen: u32,
        #[arg(long, default_value_t = 15)]
        shift: u32,
        #[arg(long, default_value_t = 1_000_000)]
        max_polls: u64,
    },
    /// Dot benchmarks across a range of power-of-two sizes.
    Sweep {
        #[arg(long, default_value_t = 3)]
        min_log2: u32,
        #[arg(long, default_value_t = 11)]
        max_log2: u32,
        #[arg(long, default_value_t = 15)]
        shift: u32,
    },
    /// Aggregate BENCH lines from a captured log.
    Summarize {
        #[arg(short, long)]
        log: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Dot { n, shift, max_polls } => {
            bench::run_dot(n, shift, max_polls)?;
        }
        Commands::Conv {
            out_len,
            klen,
            shift,
            max_polls,
        } => {
            bench::run_conv(out_len, klen, shift, max_polls)?;
        }
        Commands::Sweep {
            min_log2,
            max_log2,
            shift,
        } => {
            bench::run_sweep(min_log2, max_log2, shift)?;
        }
        Commands::Summarize { log } => {
            summary::summarize(&log)?;
        }
    }
    Ok(())
}
