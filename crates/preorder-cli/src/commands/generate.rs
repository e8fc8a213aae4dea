//! Generate command - fabricate a synthetic order dataset.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use colored::Colorize;
use preorder::{generate, write_dataset, GeneratorConfig};

pub fn run(
    count: usize,
    seed: u64,
    reference_time: Option<NaiveDateTime>,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {} orders (seed {})",
        "Generating".cyan().bold(),
        count.to_string().white().bold(),
        seed
    );

    let mut config = GeneratorConfig::default().with_seed(seed);
    if let Some(reference) = reference_time {
        config = config.with_reference_time(reference);
    }

    let records = generate(count, config)?;
    write_dataset(&output, &records)?;

    let cancelled = records.iter().filter(|r| r.is_cancelled()).count();
    if verbose {
        println!();
        println!("{}", "Dataset:".yellow().bold());
        println!("  Orders:    {}", records.len());
        println!("  Delivered: {}", (records.len() - cancelled).to_string().green());
        println!("  Cancelled: {}", cancelled.to_string().red());
        if let (Some(first), Some(last)) = (
            records.iter().map(|r| r.order_time).min(),
            records.iter().map(|r| r.order_time).max(),
        ) {
            println!("  Orders placed {} to {}", first, last);
        }
        println!();
    }

    println!(
        "{} {}",
        "Dataset written to".green().bold(),
        output.display().to_string().white()
    );
    println!(
        "Run {} to analyze it",
        format!("preorder analyze {}", output.display()).cyan().bold()
    );

    Ok(())
}
