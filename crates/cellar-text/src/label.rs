//! Wine label extraction.

use cellar_core::EMPTY_LABEL;

use crate::patterns::{PatternName, PatternRegistry, resub};

/// The "vintage + name" span preceding the first `- $` price marker.
///
/// The name is matched lazily, so when a message carries several prices the
/// span always ends at the first one.
pub fn find_label_span(text: &str) -> Option<&str> {
    let pattern = PatternRegistry::global().get(PatternName::Label);
    match pattern.regex.captures(text) {
        Ok(Some(caps)) => caps.get(1).map(|m| m.as_str()),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "label search failed");
            None
        }
    }
}

/// Extract the label from a normalized message, or [`EMPTY_LABEL`] when there
/// is none. Bottle formats, quantities and stray symbols are stripped; no
/// whitespace collapsing happens here.
pub fn get_label(text: &str) -> String {
    let label = find_label_span(text).unwrap_or(EMPTY_LABEL);

    let label = resub(PatternName::Format, label);
    let label = resub(PatternName::Quantity, &label);
    resub(PatternName::Symbol, &label)
}
