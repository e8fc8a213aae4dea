//! Dataset file reading and writing.

mod parser;
mod row;
mod source;
mod writer;

pub use parser::{load_dataset, parse_records, Dataset};
pub use row::{format_timestamp, is_null_value, parse_timestamp, DatasetRow};
pub use source::SourceMetadata;
pub use writer::write_dataset;
