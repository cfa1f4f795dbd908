//! CLI argument parsing for censo

use crate::generator::DEFAULT_START_ID;
use crate::monitor::DEFAULT_STATS_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "censo")]
#[command(version)]
#[command(about = "Synthetic population generator with monitored aggregation queries", long_about = None)]
pub struct Cli {
    /// Seed for the generator (random population when absent)
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// First id assigned by the generator
    #[arg(long = "start-id", value_name = "ID", default_value_t = DEFAULT_START_ID)]
    pub start_id: u64,

    /// Path for the statistics CSV export
    #[arg(long = "stats-file", value_name = "PATH", default_value = DEFAULT_STATS_FILE)]
    pub stats_file: PathBuf,

    /// Build a collection of N persons before showing the menu
    #[arg(short = 'n', long = "generate", value_name = "N", allow_negative_numbers = true)]
    pub generate: Option<i64>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
