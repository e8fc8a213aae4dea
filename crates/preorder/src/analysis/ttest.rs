//! Two-sample Student t-test with pooled variance.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{PreorderError, Result};
use crate::features::PreparedOrder;

use super::groups::delays_by_coupon;
use super::stats::{mean, sample_variance};

/// p-values below this are reported as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Result of a two-sided independent two-sample t-test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSampleTest {
    pub first_label: String,
    pub second_label: String,
    pub first_count: usize,
    pub second_count: usize,
    pub first_mean: f64,
    pub second_mean: f64,
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

impl TwoSampleTest {
    /// True when the p-value is below [`SIGNIFICANCE_LEVEL`].
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Test whether two independent samples have equal means, assuming equal
/// variances.
///
/// Fails with `EmptyGroup` when either sample is empty, and with
/// `DegenerateSample` when there are no degrees of freedom or both samples
/// have zero spread.
pub fn student_t_test(
    first_label: &str,
    first: &[f64],
    second_label: &str,
    second: &[f64],
) -> Result<TwoSampleTest> {
    let first_mean =
        mean(first).ok_or_else(|| PreorderError::EmptyGroup(first_label.to_string()))?;
    let second_mean =
        mean(second).ok_or_else(|| PreorderError::EmptyGroup(second_label.to_string()))?;

    let (n1, n2) = (first.len() as f64, second.len() as f64);
    let degrees_of_freedom = n1 + n2 - 2.0;
    if degrees_of_freedom < 1.0 {
        return Err(PreorderError::DegenerateSample(format!(
            "{} observations leave no degrees of freedom",
            first.len() + second.len()
        )));
    }

    // A single-value group contributes no spread
    let ss1 = sample_variance(first).unwrap_or(0.0) * (n1 - 1.0);
    let ss2 = sample_variance(second).unwrap_or(0.0) * (n2 - 1.0);
    let pooled_variance = (ss1 + ss2) / degrees_of_freedom;
    if pooled_variance <= 0.0 {
        return Err(PreorderError::DegenerateSample(format!(
            "'{}' and '{}' have zero variance",
            first_label, second_label
        )));
    }

    let standard_error = (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();
    let statistic = (first_mean - second_mean) / standard_error;

    let distribution = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .map_err(|e| PreorderError::DegenerateSample(e.to_string()))?;
    let p_value = (2.0 * distribution.sf(statistic.abs())).min(1.0);

    Ok(TwoSampleTest {
        first_label: first_label.to_string(),
        second_label: second_label.to_string(),
        first_count: first.len(),
        second_count: second.len(),
        first_mean,
        second_mean,
        statistic,
        degrees_of_freedom,
        p_value,
    })
}

/// Compare delays of orders placed with a coupon against those without.
pub fn coupon_delay_test(orders: &[PreparedOrder]) -> Result<TwoSampleTest> {
    let (with_coupon, without_coupon) = delays_by_coupon(orders);
    student_t_test("Yes", &with_coupon, "No", &without_coupon)
}
