//! Search orchestration

use crate::config::ServiceConfig;
use crate::models::MatchedRecord;
use crate::search::criteria::SearchCriteria;
use crate::search::error::SearchError;
use crate::search::filter::PredicateBuilder;
use crate::search::index::{IndexProvisioner, IndexSpec};
use crate::search::label::result_title;
use crate::search::outcome::Outcome;
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One successfully converted match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Human-readable title derived from the criteria and ordinal
    pub title: String,

    /// The matched record, passed through untouched
    pub payload: MatchedRecord,
}

/// The caller-visible product of one search invocation.
///
/// Always returned, never an unhandled fault: the worst case is an
/// empty result sequence with a `Failed` or `FailedToStart` outcome and
/// the diagnostics explaining why.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Converted results, in store-return order
    pub results: Vec<SearchResult>,

    /// Terminal status of this invocation
    pub outcome: Outcome,

    /// Accumulated non-fatal and fatal diagnostics
    pub diagnostics: Vec<SearchError>,

    /// Search execution time in milliseconds
    pub search_time_ms: u64,
}

/// Sequences index provisioning, predicate construction, query
/// execution, per-record conversion, and the final outcome computation.
pub struct SearchService {
    store: Arc<dyn DocumentStore>,
    config: ServiceConfig,
}

impl SearchService {
    pub fn new(store: Arc<dyn DocumentStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run one search over the store.
    ///
    /// Provisioning runs first when requested and is best-effort:
    /// per-spec failures become diagnostics, never aborts. A predicate
    /// or execution failure stops the search with `Failed`. Conversion
    /// failures skip the affected record and the search continues.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        provision_indexes: bool,
        specs: &[IndexSpec],
    ) -> SearchResponse {
        let start_time = std::time::Instant::now();

        let mut outcome = Outcome::FailedToStart;
        let mut results = Vec::new();
        let mut diagnostics = Vec::new();

        if provision_indexes {
            let provisioner = IndexProvisioner::new(self.store.as_ref(), &self.config);
            for (_, spec_outcome) in provisioner.ensure(specs).await {
                if let Err(err) = spec_outcome {
                    diagnostics.push(err);
                }
            }
        }

        if criteria.is_empty() {
            tracing::debug!("no criteria supplied, skipping query");
            diagnostics.push(SearchError::EmptyCriteria);
            return self.finish(results, outcome, diagnostics, start_time);
        }

        let filter = match PredicateBuilder::build(criteria) {
            Ok(filter) => filter,
            Err(err) => {
                tracing::error!(%err, "failed to build query filter");
                diagnostics.push(err);
                outcome = Outcome::Failed;
                return self.finish(results, outcome, diagnostics, start_time);
            }
        };

        let records = match self.store.find(&filter).await {
            Ok(records) => records,
            Err(err) => {
                let err = SearchError::QueryExecution(err.to_string());
                tracing::error!(%err, "query execution failed");
                diagnostics.push(err);
                outcome = Outcome::Failed;
                return self.finish(results, outcome, diagnostics, start_time);
            }
        };

        let total = records.len();
        let mut successes = 0;

        for (ordinal, record) in records.into_iter().enumerate() {
            let title = result_title(criteria, ordinal);

            match Self::convert(record, title) {
                Ok(result) => {
                    results.push(result);
                    successes += 1;
                }
                Err(reason) => {
                    let err = SearchError::ResultConversion {
                        ordinal,
                        criteria: criteria.value_strings().join(", "),
                        reason,
                    };
                    tracing::warn!(%err, "skipping unconvertible record");
                    diagnostics.push(err);
                }
            }
        }

        outcome = Outcome::from_counts(successes, total);

        tracing::debug!(%outcome, successes, total, "search completed");

        self.finish(results, outcome, diagnostics, start_time)
    }

    /// Run one search with the config-level provisioning toggle and the
    /// default spec set.
    pub async fn search_with_defaults(&self, criteria: &SearchCriteria) -> SearchResponse {
        let specs = crate::search::index::default_index_specs();
        self.search(criteria, self.config.provision_indexes, &specs)
            .await
    }

    /// Wrap a record and its title into a result. Only JSON documents
    /// can carry a label through to the caller.
    fn convert(record: MatchedRecord, title: String) -> Result<SearchResult, String> {
        if !record.is_document() {
            return Err("record is not a JSON document".to_string());
        }

        Ok(SearchResult {
            title,
            payload: record,
        })
    }

    fn finish(
        &self,
        results: Vec<SearchResult>,
        outcome: Outcome,
        diagnostics: Vec<SearchError>,
        start_time: std::time::Instant,
    ) -> SearchResponse {
        SearchResponse {
            results,
            outcome,
            diagnostics,
            search_time_ms: start_time.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use serde_json::json;

    fn service_over(store: InMemoryStore) -> SearchService {
        SearchService::new(Arc::new(store), ServiceConfig::default())
    }

    #[tokio::test]
    async fn test_empty_criteria_never_query() {
        let store = InMemoryStore::new();
        store.fail_next_find(); // would fail if the store were queried
        let service = service_over(store);

        let response = service
            .search(&SearchCriteria::new(), false, &[])
            .await;

        assert_eq!(response.outcome, Outcome::FailedToStart);
        assert!(response.results.is_empty());
        assert_eq!(response.diagnostics, vec![SearchError::EmptyCriteria]);
    }

    #[tokio::test]
    async fn test_predicate_failure_is_fatal() {
        let service = service_over(InMemoryStore::new());
        let criteria = SearchCriteria::new().with_cluster_id(u64::MAX);

        let response = service.search(&criteria, false, &[]).await;

        assert_eq!(response.outcome, Outcome::Failed);
        assert!(response.results.is_empty());
        assert!(matches!(
            response.diagnostics[0],
            SearchError::QueryConstruction { .. }
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_fatal() {
        let store = InMemoryStore::new();
        store.fail_next_find();
        let service = service_over(store);

        let response = service
            .search(&SearchCriteria::new().with_gene_id("BRCA1"), false, &[])
            .await;

        assert_eq!(response.outcome, Outcome::Failed);
        assert!(matches!(
            response.diagnostics[0],
            SearchError::QueryExecution(_)
        ));
    }

    #[tokio::test]
    async fn test_zero_matches_report_no_matches() {
        let service = service_over(InMemoryStore::new());

        let response = service
            .search(&SearchCriteria::new().with_gene_id("BRCA1"), false, &[])
            .await;

        assert_eq!(response.outcome, Outcome::NoMatches);
        assert!(response.results.is_empty());
        assert!(response.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn test_single_match_converts_and_succeeds() {
        let store = InMemoryStore::new();
        store
            .insert(MatchedRecord(json!({"gene_id": "BRCA1", "cluster_id": 1})))
            .await
            .unwrap();
        let service = service_over(store);

        let response = service
            .search(&SearchCriteria::new().with_gene_id("BRCA1"), false, &[])
            .await;

        assert_eq!(response.outcome, Outcome::Succeeded);
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "BRCA1 - 0");
    }
}
