//! Core domain models for cellar
//!
//! This crate contains:
//! - Record models (RawRecord, CleanedRecord)
//! - The ordered, de-duplicated Dataset and its output schema
//! - The error taxonomy shared by every stage

pub mod dataset;
pub mod error;
pub mod record;
pub mod schema;

pub use dataset::{Dataset, DatasetStats};
pub use error::{Error, Result};
pub use record::{CleanedRecord, EMPTY_LABEL, RawRecord};
pub use schema::OutputSchema;
