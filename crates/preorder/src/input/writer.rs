//! Dataset file writer.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use log::debug;

use crate::error::{PreorderError, Result};
use crate::order::{OrderRecord, COLUMNS};

use super::row::DatasetRow;

/// Write records as a comma-delimited file with a header row and no index
/// column, replacing any existing file.
pub fn write_dataset(path: impl AsRef<Path>, records: &[OrderRecord]) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PreorderError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| PreorderError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    // Header goes out even when there are no records
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(DatasetRow::from(record))?;
    }
    writer.flush().map_err(|e| PreorderError::io(path, e))?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
