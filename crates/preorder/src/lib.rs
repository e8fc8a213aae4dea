//! Preorder: synthetic food pre-order data and delivery delay analysis.
//!
//! The crate has two independent halves. The generator fabricates order
//! records with internally consistent timestamps and writes them to a CSV
//! file. The analyzer reads such a file back, drops cancelled orders,
//! derives time features, and computes the statistics and chart aggregates
//! of a delivery delay study.
//!
//! # Example
//!
//! ```no_run
//! use preorder::{generate, write_dataset, Analyzer, GeneratorConfig};
//!
//! let records = generate(1000, GeneratorConfig::default()).unwrap();
//! write_dataset("preorder_food_data.csv", &records).unwrap();
//!
//! let report = Analyzer::new().analyze("preorder_food_data.csv").unwrap();
//! println!("p-value: {:.4}", report.coupon_test.p_value);
//! ```

pub mod analysis;
pub mod error;
pub mod features;
pub mod generate;
pub mod input;
pub mod order;
pub mod report;

#[cfg(test)]
mod test_util;

pub use error::{PreorderError, Result};
pub use features::{load_and_prepare, prepare, PreparedOrder, PreparedTable};
pub use generate::{generate, GeneratorConfig, OrderGenerator};
pub use input::{load_dataset, write_dataset, Dataset, SourceMetadata};
pub use order::{Fulfillment, OrderRecord};
pub use report::{AnalysisConfig, AnalysisReport, Analyzer, ChartSet};

/// Dataset file used when no path is given.
pub const DEFAULT_DATASET_PATH: &str = "preorder_food_data.csv";
