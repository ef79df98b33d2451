//! Text normalization passes for merchant tasting notes
//!
//! Stages, in the order a record flows through them:
//! - [`unicode`] folds the message to lowercase ASCII
//! - [`label`] pulls the "vintage + name" label
//! - [`body`] isolates the note body between greeting and sign-off
//! - [`lines`] drops boilerplate lines
//! - [`redactor`] removes critic and publication names
//! - [`note`] applies the ordered [`patterns`] substitutions

pub mod body;
pub mod entities;
pub mod label;
pub mod lines;
pub mod note;
pub mod patterns;
pub mod redactor;
pub mod unicode;

pub use body::{AbsentMarker, BodyExtractor};
pub use label::get_label;
pub use lines::LineFilter;
pub use note::NoteNormalizer;
pub use patterns::{PatternName, PatternRegistry, resub, resub_with};
pub use redactor::{EntityRedactor, RedactionInfo};
