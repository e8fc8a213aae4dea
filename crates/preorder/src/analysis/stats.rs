//! Descriptive statistics over numeric series.

use serde::{Deserialize, Serialize};

/// Arithmetic mean, or `None` for an empty series.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sample variance (n - 1 denominator), or `None` with fewer than two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(ss / (values.len() - 1) as f64)
}

/// Quantile `q` in [0, 1] of already sorted values, linearly interpolated
/// between the two nearest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Count, mean, spread, and quartiles of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with a single value.
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize a column, or `None` if it has no values.
    pub fn describe(name: impl Into<String>, values: &[f64]) -> Option<Self> {
        let sorted = sorted(values);
        Some(Self {
            name: name.into(),
            count: sorted.len(),
            mean: mean(&sorted)?,
            std: sample_variance(&sorted).map(f64::sqrt),
            min: *sorted.first()?,
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: *sorted.last()?,
        })
    }
}

/// Box plot geometry for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within 1.5 IQR below q1.
    pub whisker_low: f64,
    /// Largest value within 1.5 IQR above q3.
    pub whisker_high: f64,
    /// Values beyond the whiskers.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Whisker reach in multiples of the interquartile range.
    pub const WHISKER_IQR: f64 = 1.5;

    /// Compute box geometry, or `None` for an empty group.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let reach = Self::WHISKER_IQR * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = sorted.iter().copied().filter(|v| (low_fence..=high_fence).contains(v));
        let whisker_low = inside.clone().next().unwrap_or(q1);
        let whisker_high = inside.last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `bins` equal-width bins spanning their range. The last
    /// bin includes its right edge. A constant series is centered in a
    /// range one unit wide. Returns `None` for no values or zero bins.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let sorted = sorted(values);
        if bins == 0 {
            return None;
        }
        let (mut low, mut high) = (*sorted.first()?, *sorted.last()?);
        if low == high {
            low -= 0.5;
            high += 0.5;
        }
        let width = (high - low) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| low + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for value in &sorted {
            let index = (((value - low) / width).floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        Some(Self { edges, counts })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), Some(5.0));
        let var = sample_variance(&values).unwrap();
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_variance(&[1.0]), None);
    }

    #[test]
    fn test_linear_quantiles() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[7.0], 0.75), Some(7.0));
    }

    #[test]
    fn test_describe() {
        let summary = ColumnSummary::describe("x", &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.std, Some(1.0));
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.median, 2.0);
        assert_eq!(summary.max, 3.0);
        assert!(ColumnSummary::describe("empty", &[]).is_none());
    }

    #[test]
    fn test_box_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = BoxSummary::from_values(&values).unwrap();
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.whisker_low, 1.0);
        assert_eq!(summary.whisker_high, 5.0);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|v| v as f64).collect();
        let hist = Histogram::from_values(&values, 30).unwrap();
        assert_eq!(hist.counts.len(), 30);
        assert_eq!(hist.edges.len(), 31);
        assert_eq!(hist.total(), 100);
        assert_eq!(hist.edges[0], 0.0);
        assert!((hist.edges[30] - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_constant_series() {
        let hist = Histogram::from_values(&[0.0, 0.0, 0.0], 4).unwrap();
        assert_eq!(hist.edges[0], -0.5);
        assert_eq!(hist.total(), 3);
        assert!(Histogram::from_values(&[], 10).is_none());
    }
}
