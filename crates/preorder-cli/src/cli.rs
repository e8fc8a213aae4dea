//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use preorder::generate::{DEFAULT_RECORD_COUNT, DEFAULT_SEED};
use preorder::DEFAULT_DATASET_PATH;

/// Preorder: synthetic food pre-order data and delivery delay analysis
#[derive(Parser)]
#[command(name = "preorder")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic order dataset, replacing any existing file
    Generate {
        /// Number of orders to generate
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECORD_COUNT)]
        count: usize,

        /// Seed for the random generator
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Latest order time, e.g. "2025-06-30 18:00:00" (default: now)
        #[arg(long, value_parser = parse_reference_time)]
        reference_time: Option<chrono::NaiveDateTime>,

        /// Output path for the dataset
        #[arg(short, long, default_value = DEFAULT_DATASET_PATH)]
        output: PathBuf,
    },

    /// Analyze a dataset and export chart data
    Analyze {
        /// Path to the dataset file
        #[arg(value_name = "FILE", default_value = DEFAULT_DATASET_PATH)]
        file: PathBuf,

        /// Output path for chart data (default: <file>.charts.json)
        #[arg(short, long, conflicts_with = "no_charts")]
        charts: Option<PathBuf>,

        /// Skip writing chart data
        #[arg(long)]
        no_charts: bool,

        /// Number of histogram bins
        #[arg(long, default_value_t = 30)]
        bins: usize,

        /// Print the full report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn parse_reference_time(s: &str) -> Result<chrono::NaiveDateTime, String> {
    preorder::input::parse_timestamp(s)
        .ok_or_else(|| format!("Invalid time: {}. Use YYYY-MM-DD HH:MM:SS.", s))
}
