//! Save and load chart documents as JSON.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{PreorderError, Result};

use super::charts::ChartSet;

impl ChartSet {
    /// Save the chart set as pretty-printed JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| PreorderError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| PreorderError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a chart set saved with [`ChartSet::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PreorderError::io(path, e))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

/// Default chart document path for a dataset: `<stem>.charts.json` beside it.
pub fn default_charts_path(dataset: &Path) -> PathBuf {
    let stem = dataset.file_stem().unwrap_or_default().to_string_lossy();
    dataset.with_file_name(format!("{}.charts.json", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Histogram;
    use crate::report::charts::{Chart, ChartData};
    use indexmap::IndexMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_charts_path() {
        let path = default_charts_path(Path::new("data/preorder_food_data.csv"));
        assert_eq!(path, PathBuf::from("data/preorder_food_data.charts.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("charts.json");

        let mut counts = IndexMap::new();
        counts.insert("Late".to_string(), 3);
        let set = ChartSet {
            charts: vec![
                Chart::new("status", "Status", "Status", "Count", ChartData::CountBar { counts }),
                Chart::new(
                    "values",
                    "Values",
                    "Value",
                    "Frequency",
                    ChartData::Histogram {
                        bins: Histogram::from_values(&[1.0, 2.0], 2).unwrap(),
                        values: vec![1.0, 2.0],
                    },
                ),
            ],
        };
        set.save(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"kind\": \"count_bar\""));
        assert_eq!(ChartSet::load(&path).unwrap(), set);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChartSet::load("/nonexistent/charts.json").unwrap_err();
        assert!(err.is_not_found());
    }
}
