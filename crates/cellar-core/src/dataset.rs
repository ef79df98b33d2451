use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::record::CleanedRecord;

/// Counts collected while building a [`Dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub unlabeled: usize,
    pub duplicates: usize,
}

/// Labeled records, unique as (label, note) pairs, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<CleanedRecord>,
}

impl Dataset {
    /// Drop unlabeled records, then drop repeated (label, note) pairs keeping
    /// the first occurrence. `records` must already be in input order.
    pub fn from_cleaned(records: Vec<CleanedRecord>) -> (Self, DatasetStats) {
        let mut stats = DatasetStats::default();

        let keep: Vec<bool> = {
            let mut seen = HashSet::with_capacity(records.len());
            records
                .iter()
                .map(|record| {
                    if record.is_unlabeled() {
                        stats.unlabeled += 1;
                        false
                    } else if !seen.insert(record) {
                        stats.duplicates += 1;
                        false
                    } else {
                        true
                    }
                })
                .collect()
        };

        let records = records
            .into_iter()
            .zip(keep)
            .filter_map(|(record, keep)| keep.then_some(record))
            .collect();

        (Self { records }, stats)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanedRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CleanedRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CleanedRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CleanedRecord;
    type IntoIter = std::slice::Iter<'a, CleanedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
