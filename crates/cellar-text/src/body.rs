//! Isolate the tasting-note body between the greeting and the sign-off.

use serde::{Deserialize, Serialize};

/// What [`trim_before`] does when the marker phrase is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentMarker {
    /// Keep the whole (trimmed) text.
    #[default]
    Keep,
    /// Drop the final character, then trim.
    DropLastChar,
}

/// Text strictly after the first occurrence of `marker`, or all of `text`
/// when it is absent. Surrounding whitespace is stripped.
pub fn trim_after<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(idx) => text[idx + marker.len()..].trim(),
        None => text.trim(),
    }
}

/// Text strictly before the first occurrence of `marker`. Surrounding
/// whitespace is stripped.
pub fn trim_before<'a>(text: &'a str, marker: &str, absent: AbsentMarker) -> &'a str {
    match (text.find(marker), absent) {
        (Some(idx), _) => text[..idx].trim(),
        (None, AbsentMarker::Keep) => text.trim(),
        (None, AbsentMarker::DropLastChar) => {
            let end = text.char_indices().last().map_or(0, |(idx, _)| idx);
            text[..end].trim()
        }
    }
}

/// Greeting/sign-off markers applied in sequence.
#[derive(Debug, Clone)]
pub struct BodyExtractor {
    start_marker: String,
    end_markers: Vec<String>,
    absent: AbsentMarker,
}

impl BodyExtractor {
    pub fn new(start_marker: String, end_markers: Vec<String>, absent: AbsentMarker) -> Self {
        Self {
            start_marker,
            end_markers,
            absent,
        }
    }

    pub fn extract<'a>(&self, text: &'a str) -> &'a str {
        let body = trim_after(text, &self.start_marker);
        self.end_markers
            .iter()
            .fold(body, |body, marker| trim_before(body, marker, self.absent))
    }
}

pub const START_MARKER: &str = "dear friends";
pub const END_MARKERS: &[&str] = &["thank you", "to order"];

impl Default for BodyExtractor {
    fn default() -> Self {
        Self::new(
            START_MARKER.to_string(),
            END_MARKERS.iter().map(|m| m.to_string()).collect(),
            AbsentMarker::default(),
        )
    }
}
