//! Analysis runs and the chart documents they produce.

mod analyzer;
mod charts;
mod persistence;

pub use analyzer::{AnalysisConfig, AnalysisReport, Analyzer, DateRange};
pub use charts::{Chart, ChartData, ChartSet};
pub use persistence::default_charts_path;
