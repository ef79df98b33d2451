use serde::{Deserialize, Serialize};

/// Label assigned when no vintage/price marker is found in a message.
pub const EMPTY_LABEL: &str = "empty";

/// One merchant email as read from the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Opaque; only used for diagnostics.
    pub date: String,
    pub message: String,
}

impl RawRecord {
    pub fn new(date: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
        }
    }
}

/// The two derived fields for one message.
///
/// `note` is ASCII, trimmed, and has every whitespace run collapsed to a
/// single space. `label` is [`EMPTY_LABEL`] when extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub label: String,
    pub note: String,
}

impl CleanedRecord {
    pub fn new(label: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            note: note.into(),
        }
    }

    /// True when the label is the sentinel.
    pub fn is_unlabeled(&self) -> bool {
        self.label == EMPTY_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_label() {
        assert!(CleanedRecord::new(EMPTY_LABEL, "some note").is_unlabeled());
        assert!(!CleanedRecord::new("2009 charvin", "some note").is_unlabeled());
    }

    #[test]
    fn test_sentinel_is_exact_match() {
        // only the exact sentinel marks a record as unlabeled
        assert!(!CleanedRecord::new("empty bottle", "").is_unlabeled());
    }
}
