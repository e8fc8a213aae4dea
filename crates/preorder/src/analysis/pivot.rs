//! Calendar pivots of mean delay.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

use crate::features::{day_name, month_name, PreparedOrder, MONTH_ORDER, WEEK_ORDER};

/// One weekday row of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRow {
    pub day: String,
    /// Mean delay per hour column; 0 where the day has no orders in that hour.
    pub values: Vec<f64>,
}

/// Mean delay by weekday and hour of day.
///
/// Rows run Monday through Sunday. Columns are the hours that occur
/// anywhere in the data, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHourMatrix {
    pub hours: Vec<u32>,
    pub rows: Vec<DayRow>,
}

impl DayHourMatrix {
    /// Pivot mean delay by (weekday, hour).
    pub fn from_orders(orders: &[PreparedOrder]) -> Self {
        let mut cells: BTreeMap<(usize, u32), (f64, usize)> = BTreeMap::new();
        let mut hours = BTreeSet::new();
        for o in orders {
            let day = week_index(o.features.day_of_week);
            let cell = cells.entry((day, o.features.hour)).or_insert((0.0, 0));
            cell.0 += o.delay_minutes();
            cell.1 += 1;
            hours.insert(o.features.hour);
        }
        let hours: Vec<u32> = hours.into_iter().collect();

        let rows = WEEK_ORDER
            .iter()
            .enumerate()
            .map(|(day, weekday)| DayRow {
                day: day_name(*weekday).to_string(),
                values: hours
                    .iter()
                    .map(|hour| match cells.get(&(day, *hour)) {
                        Some((sum, n)) => sum / *n as f64,
                        None => 0.0,
                    })
                    .collect(),
            })
            .collect();

        Self { hours, rows }
    }

    /// Cell value, or `None` if `hour` is not a column.
    pub fn get(&self, day: Weekday, hour: u32) -> Option<f64> {
        let column = self.hours.iter().position(|h| *h == hour)?;
        self.rows
            .get(week_index(day))
            .and_then(|row| row.values.get(column).copied())
    }

    pub fn day_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.day.as_str()).collect()
    }
}

/// Mean delay for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    pub month: String,
    pub count: usize,
    /// `None` when no orders fall in the month.
    pub mean_delay: Option<f64>,
}

/// Mean delay per month, January through December, every month listed.
pub fn monthly_mean_delay(orders: &[PreparedOrder]) -> Vec<MonthPoint> {
    let mut sums = [(0.0f64, 0usize); 12];
    for o in orders {
        let slot = &mut sums[o.features.month.number_from_month() as usize - 1];
        slot.0 += o.delay_minutes();
        slot.1 += 1;
    }

    MONTH_ORDER
        .iter()
        .zip(sums)
        .map(|(month, (sum, count))| MonthPoint {
            month: month_name(*month).to_string(),
            count,
            mean_delay: (count > 0).then(|| sum / count as f64),
        })
        .collect()
}

/// Position of a weekday in Monday-first order.
fn week_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Look up the point for `month` in a monthly series.
pub fn month_point(series: &[MonthPoint], month: Month) -> Option<&MonthPoint> {
    series.iter().find(|p| p.month == month_name(month))
}
