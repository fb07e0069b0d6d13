pub mod ingest_ops;
mod record_row;

pub use ingest_ops::{group_locomotives, read_records, read_records_from, RecordSet};
pub use record_row::{parse_timestamp, RecordRow};
