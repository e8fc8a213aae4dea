//! Preorder CLI - generate synthetic pre-order data and analyze delivery delays.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            count,
            seed,
            reference_time,
            output,
        } => commands::generate::run(count, seed, reference_time, output, cli.verbose),

        Commands::Analyze {
            file,
            charts,
            no_charts,
            bins,
            json,
        } => commands::analyze::run(file, charts, no_charts, bins, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `--verbose` raises the `preorder` modules to debug.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("preorder", level)
        .parse_default_env()
        .init();
}
