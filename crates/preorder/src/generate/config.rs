//! Generator configuration.

use chrono::NaiveDateTime;

use crate::error::{PreorderError, Result};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Number of records generated when none is given.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Configuration for synthetic order generation.
///
/// All randomness flows from `seed`. With a fixed `reference_time` the
/// output is reproducible; leaving it unset anchors timestamps to the clock.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the record generator.
    pub seed: u64,
    /// Latest possible order time (None = now). Orders fall between
    /// January 1st of this time's year and this time.
    pub reference_time: Option<NaiveDateTime>,
    /// Number of distinct customers (`CUST1..=N`).
    pub customer_count: u32,
    /// Number of distinct restaurants (`RES1..=N`).
    pub restaurant_count: u32,
    /// Probability that an order is cancelled.
    pub cancellation_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            reference_time: None,
            customer_count: 300,
            restaurant_count: 50,
            cancellation_rate: 0.1,
        }
    }
}

impl GeneratorConfig {
    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pin the reference time so timestamps are reproducible.
    pub fn with_reference_time(mut self, reference_time: NaiveDateTime) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    /// Set the cancellation probability.
    pub fn with_cancellation_rate(mut self, rate: f64) -> Self {
        self.cancellation_rate = rate;
        self
    }

    /// Check that the configuration can produce valid records.
    pub fn validate(&self) -> Result<()> {
        if self.customer_count == 0 {
            return Err(PreorderError::Config(
                "customer_count must be at least 1".to_string(),
            ));
        }
        if self.restaurant_count == 0 {
            return Err(PreorderError::Config(
                "restaurant_count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.cancellation_rate) {
            return Err(PreorderError::Config(format!(
                "cancellation_rate must be within [0, 1], got {}",
                self.cancellation_rate
            )));
        }
        Ok(())
    }
}
