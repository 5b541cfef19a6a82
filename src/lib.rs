#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Centralized constants for wire fields and the Datamuse endpoint.
pub mod constants;
/// Grouping core: selectors, labels, and the key-ordered grouping result.
pub mod group;
/// Dynamic record type used by field-name grouping.
pub mod record;
/// Saved-word list with optional JSON persistence.
pub mod saved;
/// Relation source interfaces and built-in implementations.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Word-relation record model and syllable grouping helpers.
pub mod words;

mod errors;

pub use errors::WordGroupsError;
pub use group::{GroupLabel, Grouped, group_by, group_by_field, try_group_by};
pub use record::{Record, label_for_field};
pub use saved::SavedWords;
#[cfg(feature = "datamuse")]
pub use source::{DatamuseConfig, DatamuseSource};
pub use source::{InMemoryRelationSource, RelationKind, RelationQuery, RelationSource};
pub use types::{FieldName, GroupHeading, SourceId, Word};
pub use words::{RelatedWord, syllable_groups, syllable_heading};
