use std::collections::BTreeMap;

use anyhow::Result;
use cellar_config::Config;
use cellar_core::{CleanedRecord, Dataset, RawRecord};
use cellar_text::{
    BodyExtractor, EntityRedactor, LineFilter, NoteNormalizer, RedactionInfo, get_label, unicode,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-run counts, logged once the dataset is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub read: usize,
    pub unlabeled: usize,
    pub duplicates: usize,
    pub kept: usize,
    /// Entity name -> number of removals across all records
    pub redactions: BTreeMap<String, usize>,
}

#[derive(Debug)]
pub struct CleanOutcome {
    pub dataset: Dataset,
    pub report: CleanReport,
}

/// Turns raw merchant emails into labeled notes.
#[derive(Debug)]
pub struct RecordCleaner {
    body: BodyExtractor,
    lines: LineFilter,
    redactor: EntityRedactor,
    notes: NoteNormalizer,
    pool: Option<rayon::ThreadPool>,
}

impl RecordCleaner {
    pub fn new(
        body: BodyExtractor,
        lines: LineFilter,
        redactor: EntityRedactor,
        notes: NoteNormalizer,
    ) -> Self {
        Self {
            body,
            lines,
            redactor,
            notes,
            pool: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let cleaner = Self::new(
            BodyExtractor::new(
                config.body.start_marker.clone(),
                config.body.end_markers.clone(),
                config.body.absent_marker,
            ),
            LineFilter::new(config.filters.boilerplate_lines.clone()),
            EntityRedactor::new(config.filters.critic_entities.clone()),
            NoteNormalizer::new(config.note.points_replacement.clone()),
        );
        cleaner.with_workers(config.engine.workers)
    }

    /// Run the per-record pass on a dedicated pool of `workers` threads.
    /// Zero keeps rayon's global pool.
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        self.pool = match workers {
            0 => None,
            n => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
        };
        Ok(self)
    }

    /// Label and note for a single message.
    pub fn clean_message(&self, message: &str) -> CleanedRecord {
        self.process(message).0
    }

    fn process(&self, message: &str) -> (CleanedRecord, Vec<RedactionInfo>) {
        let msg = unicode::normalize(message);

        // label sees the whole message, not just the body
        let label = get_label(&msg);

        let body = self.body.extract(&msg);
        let kept = self.lines.filter(body);
        let (redacted, redactions) = self.redactor.redact(&kept);
        let note = self.notes.normalize(&redacted);

        (CleanedRecord { label, note }, redactions)
    }

    /// Clean every record, then drop unlabeled ones and repeated
    /// (label, note) pairs. Output keeps input order.
    pub fn clean(&self, records: Vec<RawRecord>) -> CleanOutcome {
        let read = records.len();

        let run = || {
            records
                .into_par_iter()
                .map(|record| {
                    let (cleaned, redactions) = self.process(&record.message);
                    if cleaned.is_unlabeled() {
                        tracing::debug!(date = %record.date, "no label found");
                    } else {
                        tracing::trace!(label = %cleaned.label, note = %cleaned.note, "cleaned");
                    }
                    (cleaned, redactions)
                })
                .collect::<Vec<_>>()
        };

        let processed = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let mut redactions = BTreeMap::new();
        let cleaned = processed
            .into_iter()
            .map(|(record, infos)| {
                for info in infos {
                    *redactions.entry(info.entity).or_insert(0) += info.count;
                }
                record
            })
            .collect();

        let (dataset, stats) = Dataset::from_cleaned(cleaned);

        let report = CleanReport {
            read,
            unlabeled: stats.unlabeled,
            duplicates: stats.duplicates,
            kept: dataset.len(),
            redactions,
        };

        tracing::info!(
            read = report.read,
            unlabeled = report.unlabeled,
            duplicates = report.duplicates,
            kept = report.kept,
            "cleaned records"
        );
        tracing::debug!(redactions = ?report.redactions, "entity redactions");

        CleanOutcome { dataset, report }
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::new(
            BodyExtractor::default(),
            LineFilter::default(),
            EntityRedactor::default(),
            NoteNormalizer::default(),
        )
    }
}
