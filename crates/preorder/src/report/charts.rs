//! Chart payloads handed to an external renderer.
//!
//! Each chart carries its title, axis labels, and the exact aggregate to
//! draw. Nothing here renders; a plotting front end reads the JSON.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{BoxSummary, DayHourMatrix, Histogram, MonthPoint};

/// Data for one chart, tagged by chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    /// Binned counts plus the raw values for a density overlay.
    Histogram {
        bins: Histogram,
        values: Vec<f64>,
    },
    /// Bar per category showing a count.
    CountBar { counts: IndexMap<String, usize> },
    /// Bar per category showing a mean.
    MeanBar { means: IndexMap<String, f64> },
    /// Box per category.
    BoxPlot { groups: IndexMap<String, BoxSummary> },
    /// Weekday by hour grid.
    Heatmap { matrix: DayHourMatrix },
    /// Month-ordered line; months without data are gaps.
    Line { points: Vec<MonthPoint> },
}

/// A chart ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Stable identifier, also usable as an output file stem.
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    #[serde(flatten)]
    pub data: ChartData,
}

impl Chart {
    pub fn new(id: &str, title: &str, x_label: &str, y_label: &str, data: ChartData) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            data,
        }
    }
}

/// All charts of one analysis run, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub charts: Vec<Chart>,
}

impl ChartSet {
    /// Find a chart by id.
    pub fn get(&self, id: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
