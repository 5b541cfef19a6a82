use std::io;

use thiserror::Error;

use crate::types::{FieldName, SourceId};

/// Error type for grouping, relation lookup, and persistence failures.
#[derive(Debug, Error)]
pub enum WordGroupsError {
    #[error("record has no field '{field}'")]
    MissingField { field: FieldName },
    #[error("field '{field}' holds a {found} value, which cannot be used as a group label")]
    UnsupportedLabel {
        field: FieldName,
        found: &'static str,
    },
    #[error("relation source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("relation source '{source_id}' returned a malformed response: {details}")]
    MalformedResponse { source_id: SourceId, details: String },
    #[error("saved-word store failure: {0}")]
    SavedWordStore(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
