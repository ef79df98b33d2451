//! Cleaned dataset writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use cellar_core::{Dataset, OutputSchema, Result};

/// Header row then one row per record, in dataset order. No index column.
pub fn write_dataset<W: Write>(writer: W, dataset: &Dataset, schema: OutputSchema) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(schema.headers())?;
    for record in dataset {
        writer.write_record([&record.label, &record.note])?;
    }
    writer.flush()?;

    tracing::debug!(rows = dataset.len(), ?schema, "wrote dataset");
    Ok(())
}

pub fn write_path(path: &Path, dataset: &Dataset, schema: OutputSchema) -> Result<()> {
    let file = File::create(path)?;
    write_dataset(file, dataset, schema)
}
