//! HTTP source for Datamuse-compatible word-relation endpoints.

use tracing::info;

use crate::constants::datamuse;
use crate::errors::WordGroupsError;
use crate::source::{RelationQuery, RelationSource};
use crate::types::SourceId;
use crate::words::RelatedWord;

/// Configuration for the Datamuse-compatible HTTP source.
#[derive(Clone, Debug)]
pub struct DatamuseConfig {
    /// Stable source id used in errors and logs.
    pub source_id: SourceId,
    /// Endpoint serving word-relation queries.
    pub endpoint: String,
    /// Endpoint-side cap applied when a query carries no explicit limit.
    pub max_results: Option<usize>,
}

impl Default for DatamuseConfig {
    fn default() -> Self {
        Self {
            source_id: datamuse::DEFAULT_SOURCE_ID.to_string(),
            endpoint: datamuse::DEFAULT_ENDPOINT.to_string(),
            max_results: None,
        }
    }
}

/// Relation source issuing one GET per query against a Datamuse-compatible
/// endpoint. No retry; transport and decode failures surface as errors.
#[derive(Clone, Debug)]
pub struct DatamuseSource {
    config: DatamuseConfig,
}

impl DatamuseSource {
    /// Create a source from an explicit configuration.
    pub fn new(config: DatamuseConfig) -> Self {
        Self { config }
    }

    /// Create a source pointed at the public Datamuse endpoint.
    pub fn with_defaults() -> Self {
        Self::new(DatamuseConfig::default())
    }
}

impl RelationSource for DatamuseSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn related(&self, query: &RelationQuery) -> Result<Vec<RelatedWord>, WordGroupsError> {
        let mut request =
            ureq::get(&self.config.endpoint).query(query.kind.query_param(), &query.word);
        if let Some(limit) = query.limit.or(self.config.max_results) {
            request = request.query(datamuse::PARAM_MAX, limit.to_string());
        }

        info!(
            "[wordgroups:datamuse] requesting {} results for word='{}'",
            query.kind.as_str(),
            query.word
        );
        let response = request
            .call()
            .map_err(|err| WordGroupsError::SourceUnavailable {
                source_id: self.config.source_id.clone(),
                reason: format!("failed querying relation endpoint: {err}"),
            })?;
        let body = response.into_body().read_to_string().map_err(|err| {
            WordGroupsError::SourceUnavailable {
                source_id: self.config.source_id.clone(),
                reason: format!("failed reading relation response body: {err}"),
            }
        })?;

        serde_json::from_str(&body).map_err(|err| WordGroupsError::MalformedResponse {
            source_id: self.config.source_id.clone(),
            details: format!("expected a JSON array of word rows: {err}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_public_endpoint() {
        let source = DatamuseSource::with_defaults();
        assert_eq!(source.id(), "datamuse");
        assert_eq!(source.config.endpoint, datamuse::DEFAULT_ENDPOINT);
        assert!(source.config.max_results.is_none());
    }

    #[test]
    fn rows_decode_from_endpoint_body_shape() {
        let body = r#"[{"word":"rest","score":3793,"numSyllables":1}]"#;
        let rows: Vec<RelatedWord> = serde_json::from_str(body).unwrap();
        assert_eq!(rows[0].word, "rest");
        assert_eq!(rows[0].num_syllables, 1);
    }
}
