//! Ordered substitution passes producing the final note text.

use crate::patterns::{PatternName, resub, resub_with};

/// Passes in application order. Later passes rely on earlier ones: PRICE must
/// see the dollar sign before SYMBOL strips it, and RUN_ON only mops up what
/// SYMBOL leaves behind.
pub const NOTE_PASSES: &[PatternName] = &[
    PatternName::Points,
    PatternName::Price,
    PatternName::Quantity,
    PatternName::Score,
    PatternName::Url,
    PatternName::Ampersand,
    PatternName::Dash,
    PatternName::Ellipsis,
    PatternName::Endash,
    PatternName::Exclaim,
    PatternName::Percent,
    PatternName::Pound,
    PatternName::Slash,
    PatternName::Symbol,
    PatternName::RunOn,
];

#[derive(Debug, Clone)]
pub struct NoteNormalizer {
    points_replacement: String,
}

impl NoteNormalizer {
    pub fn new(points_replacement: impl Into<String>) -> Self {
        Self {
            points_replacement: points_replacement.into(),
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let msg = NOTE_PASSES.iter().fold(text.to_string(), |msg, &name| match name {
            PatternName::Points => resub_with(name, &msg, &self.points_replacement),
            _ => resub(name, &msg),
        });

        collapse_whitespace(&msg)
    }
}

impl Default for NoteNormalizer {
    fn default() -> Self {
        Self::new(PatternName::Points.default_replacement())
    }
}

/// Single spaces between words, nothing at either end.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
