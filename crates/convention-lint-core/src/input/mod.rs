//! Fact input: the JSON boundary between a front-end and the engine.
//!
//! # Architecture
//!
//! ```text
//! JSON text
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ validate + convert, per record
//! FactBatch { facts, rejected }
//! ```
//!
//! A malformed document is fatal. A malformed or invalid record is rejected
//! on its own and never hides the other facts.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::fact::{Fact, FactError};
use crate::types::Location;

pub mod dto;
pub mod loader;

/// Errors that prevent reading a facts document at all.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error reading the document.
    #[error("Failed to read facts from {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not a valid facts document.
    #[error("Failed to parse facts document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why a single record was rejected.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record does not have the shape of any fact kind.
    #[error("malformed fact record: {0}")]
    Shape(serde_json::Error),

    /// The record failed fact validation.
    #[error(transparent)]
    Invalid(#[from] FactError),
}

/// A record that could not be turned into a fact.
#[derive(Debug)]
pub struct RejectedFact {
    /// Position of the record in the document.
    pub index: usize,
    /// Location of the record, when it could be read.
    pub location: Option<Location>,
    /// Why the record was rejected.
    pub error: RecordError,
}

impl std::fmt::Display for RejectedFact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "fact #{} at {}: {}", self.index, location, self.error),
            None => write!(f, "fact #{}: {}", self.index, self.error),
        }
    }
}

/// Facts read from one document.
#[derive(Debug, Default)]
pub struct FactBatch {
    /// Valid facts, in document order.
    pub facts: Vec<Fact>,
    /// Records that were rejected.
    pub rejected: Vec<RejectedFact>,
}

/// Parses a facts document.
///
/// # Errors
///
/// Returns [`InputError::Parse`] if the text is not a facts document. Invalid
/// records do not fail the call; they are returned in
/// [`FactBatch::rejected`].
pub fn load_facts(json: &str) -> Result<FactBatch, InputError> {
    let document: dto::FactDocumentDto = serde_json::from_str(json)?;
    let mut batch = FactBatch::default();

    for (index, value) in document.facts.into_iter().enumerate() {
        let location = record_location(&value);
        let result = serde_json::from_value::<dto::FactRecordDto>(value)
            .map_err(RecordError::Shape)
            .and_then(|record| loader::convert_record(record).map_err(RecordError::from));

        match result {
            Ok(fact) => batch.facts.push(fact),
            Err(error) => {
                let rejected = RejectedFact {
                    index,
                    location,
                    error,
                };
                warn!("Rejected {}", rejected);
                batch.rejected.push(rejected);
            }
        }
    }

    info!(
        "Loaded {} facts ({} rejected)",
        batch.facts.len(),
        batch.rejected.len()
    );
    Ok(batch)
}

/// Reads and parses a facts document from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a facts document.
pub fn load_facts_from_file(path: &Path) -> Result<FactBatch, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_facts(&content)
}

/// Best-effort location of a raw record, for reporting rejections.
fn record_location(value: &serde_json::Value) -> Option<Location> {
    let file = value.get("file")?.as_str()?;
    let number = |key: &str| {
        value
            .get(key)
            .and_then(serde_json::Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    };
    Some(Location::new(file, number("line"), number("column")))
}
