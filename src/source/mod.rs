//! Relation source interfaces and built-in implementations.
//!
//! `RelationSource` is the lookup-facing interface that produces
//! [`RelatedWord`] rows for a query. For a fixed backing state, lookups
//! should be deterministic: same query => same rows in the same order.

use std::collections::HashMap;

use crate::constants::datamuse;
use crate::errors::WordGroupsError;
use crate::types::{SourceId, Word};
use crate::words::RelatedWord;

#[cfg(feature = "datamuse")]
mod datamuse_source;
#[cfg(feature = "datamuse")]
pub use datamuse_source::{DatamuseConfig, DatamuseSource};

/// Which relation to look up for a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Perfect rhymes.
    Rhyme,
    /// Synonyms.
    Synonym,
}

impl RelationKind {
    /// Query parameter name used by Datamuse-compatible endpoints.
    pub fn query_param(self) -> &'static str {
        match self {
            RelationKind::Rhyme => datamuse::PARAM_RHYME,
            RelationKind::Synonym => datamuse::PARAM_SYNONYM,
        }
    }

    /// Human-readable relation name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Rhyme => "rhyme",
            RelationKind::Synonym => "synonym",
        }
    }
}

/// One relation lookup request.
#[derive(Clone, Debug)]
pub struct RelationQuery {
    /// The word to look up relations for.
    pub word: Word,
    /// Which relation to look up.
    pub kind: RelationKind,
    /// Optional cap on the number of returned rows.
    pub limit: Option<usize>,
}

impl RelationQuery {
    /// Build a rhyme lookup for `word`.
    pub fn rhymes(word: impl Into<Word>) -> Self {
        Self {
            word: word.into(),
            kind: RelationKind::Rhyme,
            limit: None,
        }
    }

    /// Build a synonym lookup for `word`.
    pub fn synonyms(word: impl Into<Word>) -> Self {
        Self {
            word: word.into(),
            kind: RelationKind::Synonym,
            limit: None,
        }
    }

    /// Cap the number of returned rows.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Lookup-facing relation source interface.
pub trait RelationSource: Send + Sync {
    /// Stable source identifier used in errors and logs.
    fn id(&self) -> &str;
    /// Look up words related to `query.word`, in the backend's ranking order.
    fn related(&self, query: &RelationQuery) -> Result<Vec<RelatedWord>, WordGroupsError>;
}

/// Table-backed source for tests and offline use.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRelationSource {
    id: SourceId,
    table: HashMap<(Word, RelationKind), Vec<RelatedWord>>,
}

impl InMemoryRelationSource {
    /// Create an empty in-memory source.
    pub fn new(id: impl Into<SourceId>) -> Self {
        Self {
            id: id.into(),
            table: HashMap::new(),
        }
    }

    /// Register the rows returned for one word/relation pair.
    pub fn insert(
        &mut self,
        word: impl Into<Word>,
        kind: RelationKind,
        results: Vec<RelatedWord>,
    ) {
        self.table.insert((word.into(), kind), results);
    }
}

impl RelationSource for InMemoryRelationSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn related(&self, query: &RelationQuery) -> Result<Vec<RelatedWord>, WordGroupsError> {
        let mut results = self
            .table
            .get(&(query.word.clone(), query.kind))
            .cloned()
            .unwrap_or_default();
        if let Some(limit) = query.limit {
            results.truncate(limit);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> InMemoryRelationSource {
        let mut source = InMemoryRelationSource::new("fixture");
        source.insert(
            "test",
            RelationKind::Rhyme,
            vec![
                RelatedWord::new("rest", 1),
                RelatedWord::new("arrest", 2),
                RelatedWord::new("best", 1),
            ],
        );
        source.insert(
            "test",
            RelationKind::Synonym,
            vec![RelatedWord::new("trial", 2)],
        );
        source
    }

    #[test]
    fn query_params_match_the_relation_endpoint() {
        assert_eq!(RelationKind::Rhyme.query_param(), "rel_rhy");
        assert_eq!(RelationKind::Synonym.query_param(), "rel_syn");
    }

    #[test]
    fn lookup_honors_relation_kind() {
        let source = fixture();
        let rhymes = source.related(&RelationQuery::rhymes("test")).unwrap();
        assert_eq!(rhymes.len(), 3);
        let synonyms = source.related(&RelationQuery::synonyms("test")).unwrap();
        assert_eq!(synonyms.len(), 1);
        assert_eq!(synonyms[0].word, "trial");
    }

    #[test]
    fn lookup_honors_limit() {
        let source = fixture();
        let rhymes = source
            .related(&RelationQuery::rhymes("test").with_limit(2))
            .unwrap();
        let words: Vec<&str> = rhymes.iter().map(|row| row.word.as_str()).collect();
        assert_eq!(words, ["rest", "arrest"]);
    }

    #[test]
    fn unknown_word_yields_no_rows() {
        let source = fixture();
        let rows = source.related(&RelationQuery::rhymes("xyzzy")).unwrap();
        assert!(rows.is_empty());
    }
}
