//! The analysis run: load, prepare, aggregate, and assemble chart payloads.

use std::path::Path;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::{
    coupon_delay_test, delays_by_coupon, delays_by_weekend, delivery_status_counts,
    mean_delay_by_zone, monthly_mean_delay, rating_counts, value_delay_correlation, BoxSummary,
    ColumnSummary, DayHourMatrix, Histogram, MonthPoint, TwoSampleTest,
};
use crate::error::{PreorderError, Result};
use crate::features::{load_and_prepare, PreparedOrder, PreparedTable};
use crate::input::SourceMetadata;

use super::charts::{Chart, ChartData, ChartSet};

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Number of bins in distribution histograms.
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { histogram_bins: 30 }
    }
}

impl AnalysisConfig {
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(PreorderError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Earliest and latest order time in the analyzed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

/// Everything computed by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Dataset file, when the data came from disk.
    pub source: Option<SourceMetadata>,
    /// Rows in the dataset, cancelled included.
    pub total_rows: usize,
    /// Rows dropped for lacking a delivery status.
    pub excluded_rows: usize,
    /// Delivered orders analyzed.
    pub analyzed_rows: usize,
    pub date_range: DateRange,
    /// Descriptive statistics of the numeric columns.
    pub summaries: Vec<ColumnSummary>,
    pub delivery_status_counts: IndexMap<String, usize>,
    pub mean_delay_by_zone: IndexMap<String, f64>,
    /// Delay with a coupon ("Yes") against without ("No").
    pub coupon_test: TwoSampleTest,
    /// Pearson correlation of order value and delay; `None` if undefined.
    pub value_delay_correlation: Option<f64>,
    pub delay_heatmap: DayHourMatrix,
    pub monthly_delay: Vec<MonthPoint>,
    pub charts: ChartSet,
}

/// Runs the analysis pipeline over a dataset.
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Load a dataset file and analyze its delivered orders.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let path = path.as_ref();
        info!("Analyzing {}", path.display());
        let table = load_and_prepare(path)?;
        self.analyze_table(table)
    }

    /// Analyze an already prepared table.
    pub fn analyze_table(&self, table: PreparedTable) -> Result<AnalysisReport> {
        self.config.validate()?;
        if table.is_empty() {
            return Err(PreorderError::EmptyData(
                "No delivered orders to analyze".to_string(),
            ));
        }
        let orders = &table.orders;

        let date_range = date_range(orders)?;
        let coupon_test = coupon_delay_test(orders)?;
        debug!(
            "Coupon t-test: t = {:.3}, p = {:.4}",
            coupon_test.statistic, coupon_test.p_value
        );

        let delivery_status_counts: IndexMap<String, usize> = delivery_status_counts(orders)
            .into_iter()
            .map(|(status, n)| (status.to_string(), n))
            .collect();
        let mean_delay_by_zone: IndexMap<String, f64> = mean_delay_by_zone(orders)
            .into_iter()
            .map(|(zone, m)| (zone.to_string(), m))
            .collect();
        let delay_heatmap = DayHourMatrix::from_orders(orders);
        let monthly_delay = monthly_mean_delay(orders);

        let charts = self.build_charts(
            orders,
            &delivery_status_counts,
            &mean_delay_by_zone,
            &delay_heatmap,
            &monthly_delay,
        );

        Ok(AnalysisReport {
            source: table.source,
            total_rows: table.total_rows,
            excluded_rows: table.excluded_rows,
            analyzed_rows: orders.len(),
            date_range,
            summaries: summaries(orders),
            delivery_status_counts,
            mean_delay_by_zone,
            coupon_test,
            value_delay_correlation: value_delay_correlation(orders),
            delay_heatmap,
            monthly_delay,
            charts,
        })
    }

    /// Assemble the chart payloads in presentation order.
    fn build_charts(
        &self,
        orders: &[PreparedOrder],
        status_counts: &IndexMap<String, usize>,
        zone_means: &IndexMap<String, f64>,
        heatmap: &DayHourMatrix,
        monthly: &[MonthPoint],
    ) -> ChartSet {
        let mut charts = Vec::new();
        let bins = self.config.histogram_bins;

        let values: Vec<f64> = orders.iter().map(|o| o.record.order_value).collect();
        if let Some(hist) = Histogram::from_values(&values, bins) {
            charts.push(Chart::new(
                "order_value_distribution",
                "Order Value Distribution",
                "Order Value (INR)",
                "Frequency",
                ChartData::Histogram { bins: hist, values },
            ));
        }

        let delays: Vec<f64> = orders.iter().map(|o| o.delay_minutes()).collect();
        if let Some(hist) = Histogram::from_values(&delays, bins) {
            charts.push(Chart::new(
                "delay_distribution",
                "Delivery Delay (Minutes)",
                "Delay in Minutes",
                "Number of Orders",
                ChartData::Histogram { bins: hist, values: delays },
            ));
        }

        charts.push(Chart::new(
            "delivery_status_count",
            "Delivery Status: On-Time vs Late",
            "Delivery Status",
            "Count",
            ChartData::CountBar {
                counts: status_counts.clone(),
            },
        ));

        charts.push(Chart::new(
            "delay_by_zone",
            "Avg Delay by Zone",
            "Zone",
            "Avg Delay (min)",
            ChartData::MeanBar {
                means: zone_means.clone(),
            },
        ));

        charts.push(Chart::new(
            "rating_count",
            "Customer Ratings",
            "Rating",
            "Count",
            ChartData::CountBar {
                counts: rating_counts(orders)
                    .into_iter()
                    .map(|(rating, n)| (rating.to_string(), n))
                    .collect(),
            },
        ));

        let (with_coupon, without_coupon) = delays_by_coupon(orders);
        charts.push(Chart::new(
            "delay_by_coupon",
            "Delay by Coupon Use",
            "Coupon Used",
            "Delay (min)",
            ChartData::BoxPlot {
                groups: box_groups([("Yes", with_coupon), ("No", without_coupon)]),
            },
        ));

        charts.push(Chart::new(
            "delay_heatmap",
            "Heatmap: Avg Delay by Day and Hour",
            "Hour of Day",
            "Day of Week",
            ChartData::Heatmap {
                matrix: heatmap.clone(),
            },
        ));

        let (weekday, weekend) = delays_by_weekend(orders);
        charts.push(Chart::new(
            "delay_weekday_weekend",
            "Delay: Weekday vs Weekend",
            "Is Weekend?",
            "Delay (min)",
            ChartData::BoxPlot {
                groups: box_groups([("Weekday", weekday), ("Weekend", weekend)]),
            },
        ));

        charts.push(Chart::new(
            "monthly_delay",
            "Seasonality: Monthly Average Delay",
            "Month",
            "Avg Delay (min)",
            ChartData::Line {
                points: monthly.to_vec(),
            },
        ));

        ChartSet { charts }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Box summaries for each non-empty group, in the given order.
fn box_groups<const N: usize>(groups: [(&str, Vec<f64>); N]) -> IndexMap<String, BoxSummary> {
    groups
        .into_iter()
        .filter_map(|(label, values)| {
            BoxSummary::from_values(&values).map(|summary| (label.to_string(), summary))
        })
        .collect()
}

fn date_range(orders: &[PreparedOrder]) -> Result<DateRange> {
    let times = orders.iter().map(|o| o.record.order_time);
    match (times.clone().min(), times.max()) {
        (Some(first), Some(last)) => Ok(DateRange { first, last }),
        _ => Err(PreorderError::EmptyData("No order times".to_string())),
    }
}

/// Descriptive statistics of the numeric columns, in a fixed order.
fn summaries(orders: &[PreparedOrder]) -> Vec<ColumnSummary> {
    let columns: [(&str, fn(&PreparedOrder) -> f64); 5] = [
        ("order_value", |o: &PreparedOrder| o.record.order_value),
        ("rating", |o: &PreparedOrder| f64::from(o.delivery.rating)),
        ("pre_order_lead_minutes", |o: &PreparedOrder| {
            o.features.pre_order_lead_minutes
        }),
        ("delay_minutes", |o: &PreparedOrder| o.features.delay_minutes),
        ("hour", |o: &PreparedOrder| f64::from(o.features.hour)),
    ];

    columns
        .iter()
        .filter_map(|(name, value)| {
            let values: Vec<f64> = orders.iter().map(value).collect();
            ColumnSummary::describe(*name, &values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prepare;
    use crate::generate::{generate, GeneratorConfig};
    use crate::test_util::OrderBuilder;
    use chrono::NaiveDate;

    fn generated_table(n: usize) -> PreparedTable {
        let reference = NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let config = GeneratorConfig::default().with_reference_time(reference);
        prepare(generate(n, config).unwrap())
    }

    fn table_of(orders: Vec<PreparedOrder>) -> PreparedTable {
        PreparedTable {
            source: None,
            total_rows: orders.len(),
            excluded_rows: 0,
            orders,
        }
    }

    #[test]
    fn test_full_report_from_generated_data() {
        let table = generated_table(1000);
        let analyzed = table.len();
        let report = Analyzer::new().analyze_table(table).unwrap();

        assert_eq!(report.analyzed_rows, analyzed);
        assert_eq!(report.total_rows, 1000);
        assert_eq!(report.excluded_rows, 1000 - analyzed);
        assert_eq!(report.summaries.len(), 5);
        assert_eq!(report.delay_heatmap.rows.len(), 7);
        assert_eq!(report.monthly_delay.len(), 12);
        assert_eq!(report.charts.len(), 9);
        assert_eq!(
            report.delivery_status_counts.values().sum::<usize>(),
            analyzed
        );
        assert!(report.coupon_test.p_value >= 0.0 && report.coupon_test.p_value <= 1.0);
        assert!(report.date_range.first <= report.date_range.last);
    }

    #[test]
    fn test_chart_kinds() {
        let report = Analyzer::new().analyze_table(generated_table(300)).unwrap();
        let kind = |id: &str| report.charts.get(id).map(|c| c.data.clone());

        assert!(matches!(kind("order_value_distribution"), Some(ChartData::Histogram { .. })));
        assert!(matches!(kind("delivery_status_count"), Some(ChartData::CountBar { .. })));
        assert!(matches!(kind("delay_by_zone"), Some(ChartData::MeanBar { .. })));
        assert!(matches!(kind("delay_by_coupon"), Some(ChartData::BoxPlot { .. })));
        assert!(matches!(kind("delay_heatmap"), Some(ChartData::Heatmap { .. })));
        assert!(matches!(kind("monthly_delay"), Some(ChartData::Line { .. })));
    }

    #[test]
    fn test_histogram_bins_follow_config() {
        let analyzer = Analyzer::with_config(AnalysisConfig::default().with_histogram_bins(12));
        let report = analyzer.analyze_table(generated_table(200)).unwrap();
        match &report.charts.get("delay_distribution").unwrap().data {
            ChartData::Histogram { bins, values } => {
                assert_eq!(bins.counts.len(), 12);
                assert_eq!(bins.total(), values.len());
            }
            other => panic!("unexpected chart data {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let result = Analyzer::new().analyze_table(table_of(Vec::new()));
        assert!(matches!(result, Err(PreorderError::EmptyData(_))));
    }

    #[test]
    fn test_missing_coupon_group_aborts() {
        let orders = vec![
            OrderBuilder::new().coupon(true).delay(5).build(),
            OrderBuilder::new().coupon(true).delay(15).build(),
        ];
        let result = Analyzer::new().analyze_table(table_of(orders));
        assert!(matches!(result, Err(PreorderError::EmptyGroup(g)) if g == "No"));
    }

    #[test]
    fn test_zero_bins_rejected() {
        let analyzer = Analyzer::with_config(AnalysisConfig::default().with_histogram_bins(0));
        assert!(matches!(
            analyzer.analyze_table(generated_table(50)),
            Err(PreorderError::Config(_))
        ));
    }
}
