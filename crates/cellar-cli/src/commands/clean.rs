use std::path::PathBuf;

use anyhow::{Context, Result};
use cellar_config::Config;
use cellar_core::OutputSchema;
use cellar_engine::RecordCleaner;

pub fn handle(
    input: PathBuf,
    output: Option<PathBuf>,
    schema: Option<OutputSchema>,
    workers: Option<usize>,
    config: &Config,
) -> Result<()> {
    let schema = schema.unwrap_or(config.output.schema);

    let mut config = config.clone();
    if let Some(workers) = workers {
        config.engine.workers = workers;
    }
    let cleaner = RecordCleaner::from_config(&config)?;

    let records = cellar_sources::read_path(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let outcome = cleaner.clean(records);

    match output {
        Some(path) => {
            cellar_sources::write_path(&path, &outcome.dataset, schema)
                .with_context(|| format!("failed to write {}", path.display()))?;

            let report = &outcome.report;
            println!("✓ Wrote {} records to {}", report.kept, path.display());
            println!("  Read: {}", report.read);
            println!("  Unlabeled (dropped): {}", report.unlabeled);
            println!("  Duplicates (dropped): {}", report.duplicates);
        }
        None => {
            let stdout = std::io::stdout();
            cellar_sources::write_dataset(stdout.lock(), &outcome.dataset, schema)?;
        }
    }

    Ok(())
}
