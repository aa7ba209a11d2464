//! Supporting-index provisioning

use crate::config::ServiceConfig;
use crate::models::{CLUSTER_ID_FIELD, GENE_ID_FIELD};
use crate::search::error::SearchError;
use crate::store::{DocumentStore, ProvisionStatus};
use serde::{Deserialize, Serialize};

/// A field name paired with index-provisioning options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    /// Canonical store-side field name
    pub field: String,

    /// Enforce uniqueness across the collection
    #[serde(default)]
    pub unique: bool,

    /// Build the index without blocking other collection operations
    #[serde(default)]
    pub background: bool,
}

impl IndexSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            unique: false,
            background: false,
        }
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }
}

/// The fixed spec set: one per filterable field, built in the
/// background, without uniqueness (several gene trees can share a gene
/// or a cluster).
pub fn default_index_specs() -> Vec<IndexSpec> {
    vec![
        IndexSpec::new(GENE_ID_FIELD).background(true),
        IndexSpec::new(CLUSTER_ID_FIELD).background(true),
    ]
}

/// Ensures named supporting indexes exist ahead of querying.
///
/// Provisioning is best-effort and per-spec independent: one failure is
/// logged and reported but never aborts the remaining specs, nor the
/// search that follows.
pub struct IndexProvisioner<'a> {
    store: &'a dyn DocumentStore,
    config: &'a ServiceConfig,
}

impl<'a> IndexProvisioner<'a> {
    pub fn new(store: &'a dyn DocumentStore, config: &'a ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Provision every spec, reporting an outcome per spec.
    pub async fn ensure(
        &self,
        specs: &[IndexSpec],
    ) -> Vec<(IndexSpec, Result<ProvisionStatus, SearchError>)> {
        let mut outcomes = Vec::with_capacity(specs.len());

        for spec in specs {
            let outcome = match self.store.ensure_index(spec).await {
                Ok(status) => {
                    tracing::debug!(field = %spec.field, ?status, "index provisioned");
                    Ok(status)
                }
                Err(err) => {
                    let err = SearchError::IndexProvision {
                        field: spec.field.clone(),
                        database: self.config.database.clone(),
                        collection: self.config.collection.clone(),
                        reason: err.to_string(),
                    };
                    tracing::warn!(field = %spec.field, %err, "index provisioning failed");
                    Err(err)
                }
            };

            outcomes.push((spec.clone(), outcome));
        }

        outcomes
    }
}
