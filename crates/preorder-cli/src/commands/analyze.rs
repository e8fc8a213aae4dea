//! Analyze command - compute delivery delay statistics and export chart data.

use std::path::PathBuf;

use colored::Colorize;
use preorder::analysis::SIGNIFICANCE_LEVEL;
use preorder::report::default_charts_path;
use preorder::{AnalysisConfig, AnalysisReport, Analyzer};

pub fn run(
    file: PathBuf,
    charts: Option<PathBuf>,
    no_charts: bool,
    bins: usize,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!(
            "File not found: {}\nRun 'preorder generate' first.",
            file.display()
        )
        .into());
    }

    let analyzer = Analyzer::with_config(AnalysisConfig::default().with_histogram_bins(bins));
    let report = analyzer.analyze(&file)?;

    let charts_path = if no_charts {
        None
    } else {
        Some(charts.unwrap_or_else(|| default_charts_path(&file)))
    };
    if let Some(ref path) = charts_path {
        report.charts.save(path)?;
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    print_summary(&report, verbose);

    if let Some(path) = charts_path {
        println!();
        println!(
            "{} {} ({} charts)",
            "Chart data saved to".green().bold(),
            path.display().to_string().white(),
            report.charts.len()
        );
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport, verbose: bool) {
    println!(
        "{} delivered orders ({} cancelled excluded of {})",
        report.analyzed_rows.to_string().white().bold(),
        report.excluded_rows.to_string().red(),
        report.total_rows
    );
    println!(
        "Date range: {} to {}",
        report.date_range.first, report.date_range.last
    );
    println!();

    println!("{}", "Summary statistics:".yellow().bold());
    println!(
        "  {:24} {:>6} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in &report.summaries {
        let std = s.std.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());
        println!(
            "  {:24} {:>6} {:>9.2} {:>9} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            s.name, s.count, s.mean, std, s.min, s.q1, s.median, s.q3, s.max
        );
    }
    println!();

    println!("{}", "Delivery status:".yellow().bold());
    for (status, count) in &report.delivery_status_counts {
        println!("  {:10} {}", status, count);
    }
    println!();

    println!("{}", "Average delay by zone:".yellow().bold());
    for (zone, mean) in &report.mean_delay_by_zone {
        println!("  {:10} {:.2} min", zone, mean);
    }
    println!();

    let test = &report.coupon_test;
    println!("{}", "T-test: delay by coupon use".yellow().bold());
    println!(
        "  Coupon: {:.2} min (n={})   No coupon: {:.2} min (n={})",
        test.first_mean, test.first_count, test.second_mean, test.second_count
    );
    println!("  T-statistic: {:.3}", test.statistic);
    println!("  P-value:     {:.4}", test.p_value);
    if test.is_significant() {
        println!(
            "  {}",
            format!(
                "Statistically significant difference in delay (p < {})",
                SIGNIFICANCE_LEVEL
            )
            .green()
        );
    } else {
        println!(
            "  {}",
            "No significant difference in delay between groups".blue()
        );
    }
    println!();

    match report.value_delay_correlation {
        Some(r) => println!("Correlation between order value and delay: {:.3}", r),
        None => println!("Correlation between order value and delay: undefined"),
    }

    if verbose {
        println!();
        println!("{}", "Monthly average delay:".yellow().bold());
        for point in &report.monthly_delay {
            match point.mean_delay {
                Some(mean) => {
                    println!("  {:10} {:>6.2} min (n={})", point.month, mean, point.count)
                }
                None => println!("  {:10} {:>6}", point.month, "-"),
            }
        }
        if let Some(ref source) = report.source {
            println!();
            println!("Source: {} ({} bytes, {})", source.file, source.size_bytes, source.hash);
        }
    }
}
