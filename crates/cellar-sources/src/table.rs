//! Merchant email table reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cellar_core::{Error, RawRecord, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MessageRow {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Read `date`/`message` rows from CSV with a header line. Other columns are
/// ignored. A row without a message body aborts the read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<MessageRow>().enumerate() {
        let row = row?;
        // 1-indexed data rows, header excluded
        let row_number = idx + 1;

        let message = row
            .message
            .filter(|m| !m.is_empty())
            .ok_or(Error::MissingField {
                row: row_number,
                field: "message",
            })?;

        records.push(RawRecord::new(row.date.unwrap_or_default(), message));
    }

    tracing::debug!(rows = records.len(), "read message table");
    Ok(records)
}

pub fn read_path(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    read_records(file)
}
