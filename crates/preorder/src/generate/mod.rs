//! Synthetic dataset generation.

mod config;
mod generator;

pub use config::{GeneratorConfig, DEFAULT_RECORD_COUNT, DEFAULT_SEED};
pub use generator::{generate, OrderGenerator};
