use serde::{Deserialize, Serialize};

/// Column layout of the written table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSchema {
    /// `labels`, `notes`
    #[default]
    Dataset,
    /// `name`, `note`, as read by the training stage
    Training,
}

impl OutputSchema {
    pub fn headers(self) -> [&'static str; 2] {
        match self {
            OutputSchema::Dataset => ["labels", "notes"],
            OutputSchema::Training => ["name", "note"],
        }
    }
}
