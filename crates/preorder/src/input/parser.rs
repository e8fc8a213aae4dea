//! Dataset file reader with one-time schema validation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};

use crate::error::{PreorderError, Result};
use crate::order::{OrderRecord, COLUMNS};

use super::row::DatasetRow;
use super::source::SourceMetadata;

/// Records read from a dataset file, with metadata about the file.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: SourceMetadata,
    pub records: Vec<OrderRecord>,
}

impl Dataset {
    /// Number of cancelled records.
    pub fn cancelled_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_cancelled()).count()
    }
}

/// Read a dataset file written by [`write_dataset`](super::write_dataset).
///
/// Fails with an IO error if the file is absent, a missing-column error if
/// the header lacks any required column, and a parse error on the first
/// cell that does not convert to its type.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|e| PreorderError::io(path, e))?;
    let size_bytes = file
        .metadata()
        .map_err(|e| PreorderError::io(path, e))?
        .len();

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| PreorderError::io(path, e))?;

    let mut hasher = Sha256::new();
    hasher.update(&contents);
    let hash = format!("sha256:{:x}", hasher.finalize());

    let (records, column_count) = parse_records(&contents)?;
    debug!("Loaded {} records from {}", records.len(), path.display());

    let source = SourceMetadata::new(
        path.to_path_buf(),
        hash,
        size_bytes,
        records.len(),
        column_count,
    );

    Ok(Dataset { source, records })
}

/// Parse dataset bytes, returning the records and the header width.
pub fn parse_records(bytes: &[u8]) -> Result<(Vec<OrderRecord>, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(PreorderError::EmptyData("No columns found".to_string()));
    }
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<DatasetRow>().enumerate() {
        let row = result?;
        records.push(row.into_record(index + 1)?);
    }

    Ok((records, headers.len()))
}

/// Check that every required column is present.
fn validate_headers(headers: &csv::StringRecord) -> Result<()> {
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PreorderError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "order_id,customer_id,restaurant_id,order_time,scheduled_time,actual_delivery_time,location_zone,food_items,order_value,delivery_status,cancellation_status,cancellation_reason,rating,coupon_used,device_type,subscription_user";

    #[test]
    fn test_parse_pandas_style_rows() {
        let data = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "ORD00000,CUST7,RES2,2025-02-01 08:00:00,2025-02-01 09:00:00,2025-02-01 09:20:00,Zone A,\"Pizza, Tacos\",250.75,Late,Not Cancelled,,3.0,No,Web,Yes",
            "ORD00001,CUST9,RES4,2025-02-02 08:00:00,2025-02-02 08:45:00,,Zone C,Salad,120.0,,Cancelled,Out of stock,,Yes,Android,No",
        );
        let (records, width) = parse_records(data.as_bytes()).unwrap();
        assert_eq!(width, 16);
        assert_eq!(records.len(), 2);
        assert!(!records[0].is_cancelled());
        assert!(records[1].is_cancelled());
    }

    #[test]
    fn test_missing_column_fails_fast() {
        let header = HEADER.replace(",rating", "");
        let data = format!("{}\n", header);
        match parse_records(data.as_bytes()) {
            Err(PreorderError::MissingColumn(column)) => assert_eq!(column, "rating"),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn test_column_order_is_free() {
        let mut columns: Vec<&str> = HEADER.split(',').collect();
        columns.reverse();
        let data = format!(
            "{},extra\n{},ignored\n",
            columns.join(","),
            "Yes,Web,No,5,,Not Cancelled,On-Time,300,Burger,Zone D,2025-06-01 12:30:00,2025-06-01 12:40:00,2025-06-01 12:00:00,RES1,CUST1,ORD00000"
        );
        let (records, width) = parse_records(data.as_bytes()).unwrap();
        assert_eq!(width, 17);
        assert_eq!(records[0].order_id, "ORD00000");
        assert_eq!(records[0].delivery().unwrap().rating, 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_records(b""),
            Err(PreorderError::EmptyData(_))
        ));
    }
}
