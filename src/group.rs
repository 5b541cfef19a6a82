//! Deterministic grouping of records into a key-ordered mapping.
//!
//! The grouper is a pure, single-pass transformation: records are bucketed by
//! a selector in encounter order, then the buckets are emitted sorted by
//! label. Within a bucket the input order is preserved, every input record
//! lands in exactly one bucket, and no empty buckets exist. Same records +
//! same selector => same output.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::errors::WordGroupsError;
use crate::record::{Record, label_for_field};

/// Grouping result: label to the records carrying that label, in input order.
///
/// Keys are emitted in ascending order under the label type's `Ord`.
pub type Grouped<K, T> = IndexMap<K, Vec<T>>;

/// A group label extracted from a dynamic record field.
///
/// Labels are either integers or text. The total order is: all integers
/// (numerically ascending) before all text labels (lexicographically
/// ascending). This resolves the mixed-type comparison that a loosely typed
/// caller could otherwise hit (syllable counts arriving as both `3` and
/// `"3"`) with one canonical, documented ordering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupLabel {
    /// Integer label (e.g. a syllable count).
    Number(i64),
    /// Text label (e.g. a team name).
    Text(String),
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Number(value) => write!(f, "{value}"),
            GroupLabel::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for GroupLabel {
    fn from(value: i64) -> Self {
        GroupLabel::Number(value)
    }
}

impl From<&str> for GroupLabel {
    fn from(value: &str) -> Self {
        GroupLabel::Text(value.to_string())
    }
}

impl From<String> for GroupLabel {
    fn from(value: String) -> Self {
        GroupLabel::Text(value)
    }
}

/// Group `records` by the label computed by `selector`.
///
/// Records are moved into the result; duplicate records (by value) are kept
/// and grouped independently.
pub fn group_by<T, K, F>(records: impl IntoIterator<Item = T>, selector: F) -> Grouped<K, T>
where
    K: Hash + Eq + Ord,
    F: Fn(&T) -> K,
{
    let mut groups: Grouped<K, T> = IndexMap::new();
    for record in records {
        let label = selector(&record);
        groups.entry(label).or_default().push(record);
    }
    groups.sort_keys();
    groups
}

/// Group `records` by a fallible selector.
///
/// The first selector failure aborts the call and surfaces to the caller; no
/// partial result is produced.
pub fn try_group_by<T, K, F, E>(
    records: impl IntoIterator<Item = T>,
    selector: F,
) -> Result<Grouped<K, T>, E>
where
    K: Hash + Eq + Ord,
    F: Fn(&T) -> Result<K, E>,
{
    let mut groups: Grouped<K, T> = IndexMap::new();
    for record in records {
        let label = selector(&record)?;
        groups.entry(label).or_default().push(record);
    }
    groups.sort_keys();
    Ok(groups)
}

/// Group dynamic records by the value of the named field.
///
/// Equivalent to `try_group_by(records, |r| label_for_field(r, field))`: a
/// record missing the field, or holding a value that cannot act as a label,
/// fails the whole call.
pub fn group_by_field(
    records: impl IntoIterator<Item = Record>,
    field: &str,
) -> Result<Grouped<GroupLabel, Record>, WordGroupsError> {
    try_group_by(records, |record| label_for_field(record, field))
}
