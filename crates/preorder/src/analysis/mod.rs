//! Aggregations and statistics over prepared orders.
//!
//! Every computation here is read-only and independent of the others.

mod correlation;
mod groups;
mod pivot;
mod stats;
mod ttest;

pub use correlation::{pearson, value_delay_correlation};
pub use groups::{
    delays_by_coupon, delays_by_weekend, delivery_status_counts, grouped_mean,
    mean_delay_by_zone, rating_counts, value_counts,
};
pub use pivot::{month_point, monthly_mean_delay, DayHourMatrix, DayRow, MonthPoint};
pub use stats::{mean, quantile_sorted, sample_variance, BoxSummary, ColumnSummary, Histogram};
pub use ttest::{coupon_delay_test, student_t_test, TwoSampleTest, SIGNIFICANCE_LEVEL};
