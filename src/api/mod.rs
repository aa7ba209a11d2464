//! Host-facing service adapter
//!
//! Bridges whatever loosely-typed parameter surface the host exposes to
//! the typed search core. The adapter owns the service's registration
//! metadata (name, alias, description) and the translation of raw host
//! parameters into [`SearchCriteria`]; the core underneath stays
//! host-agnostic.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::search::{default_index_specs, SearchCriteria, SearchResponse, SearchService};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Host parameter carrying the gene identifier
pub const GENE_PARAM: &str = "Gene";

/// Host parameter carrying the cluster identifier
pub const CLUSTER_PARAM: &str = "Cluster";

/// Host parameter requesting index provisioning ahead of the search
pub const GENERATE_INDEXES_PARAM: &str = "Generate indexes";

const SERVICE_NAME: &str = "GeneTrees search service";
const SERVICE_ALIAS: &str = "gene_trees-search";
const SERVICE_DESCRIPTION: &str =
    "A service to get the parental data for given markers and populations";

/// Registration metadata exposed to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub name: String,
    pub alias: String,
    pub description: String,
    pub info_uri: Option<String>,
}

/// The adapter object the host registers and invokes
pub struct SearchAdapter {
    descriptor: ServiceDescriptor,
    service: SearchService,
}

impl SearchAdapter {
    pub fn builder() -> SearchAdapterBuilder {
        SearchAdapterBuilder::new()
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    /// Parse the host's raw parameter document into typed criteria and
    /// the provisioning toggle.
    ///
    /// A blank or whitespace-only gene value counts as absent; a
    /// wrongly typed parameter is a validation error before any search
    /// is attempted.
    pub fn parse_parameters(params: &Value) -> Result<(SearchCriteria, bool), ServiceError> {
        let params = params.as_object().ok_or_else(|| {
            ServiceError::Validation("parameters must be a JSON object".to_string())
        })?;

        let mut criteria = SearchCriteria::new();

        if let Some(gene) = params.get(GENE_PARAM) {
            if !gene.is_null() {
                let gene = gene.as_str().ok_or_else(|| {
                    ServiceError::Validation(format!("{GENE_PARAM} must be a string"))
                })?;
                let gene = gene.trim();
                if !gene.is_empty() {
                    criteria = criteria.with_gene_id(gene);
                }
            }
        }

        if let Some(cluster) = params.get(CLUSTER_PARAM) {
            if !cluster.is_null() {
                let cluster = cluster.as_u64().ok_or_else(|| {
                    ServiceError::Validation(format!(
                        "{CLUSTER_PARAM} must be a non-negative integer"
                    ))
                })?;
                criteria = criteria.with_cluster_id(cluster);
            }
        }

        let provision = match params.get(GENERATE_INDEXES_PARAM) {
            Some(flag) if !flag.is_null() => flag.as_bool().ok_or_else(|| {
                ServiceError::Validation(format!("{GENERATE_INDEXES_PARAM} must be a boolean"))
            })?,
            _ => false,
        };

        Ok((criteria, provision))
    }

    /// Parse the host parameters and drive one search invocation.
    pub async fn run(&self, params: &Value) -> Result<SearchResponse, ServiceError> {
        let (criteria, provision) = Self::parse_parameters(params)?;

        tracing::info!(
            service = %self.descriptor.name,
            ?criteria,
            provision,
            "running search"
        );

        Ok(self
            .service
            .search(&criteria, provision, &default_index_specs())
            .await)
    }
}

/// Builder for [`SearchAdapter`]
pub struct SearchAdapterBuilder {
    descriptor: ServiceDescriptor,
    config: ServiceConfig,
    store: Option<Arc<dyn DocumentStore>>,
}

impl SearchAdapterBuilder {
    pub fn new() -> Self {
        Self {
            descriptor: ServiceDescriptor {
                name: SERVICE_NAME.to_string(),
                alias: SERVICE_ALIAS.to_string(),
                description: SERVICE_DESCRIPTION.to_string(),
                info_uri: None,
            },
            config: ServiceConfig::default(),
            store: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.descriptor.name = name.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.descriptor.alias = alias.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = description.into();
        self
    }

    pub fn info_uri(mut self, uri: impl Into<String>) -> Self {
        self.descriptor.info_uri = Some(uri.into());
        self
    }

    pub fn config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<SearchAdapter, ServiceError> {
        let store = self.store.ok_or_else(|| {
            ServiceError::Configuration("adapter requires a document store".to_string())
        })?;

        Ok(SearchAdapter {
            descriptor: self.descriptor,
            service: SearchService::new(store, self.config),
        })
    }
}

impl Default for SearchAdapterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_gene_parameter_is_dropped() {
        let (criteria, _) =
            SearchAdapter::parse_parameters(&json!({ GENE_PARAM: "   " })).unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_full_parameter_set() {
        let params = json!({
            GENE_PARAM: " BRCA1 ",
            CLUSTER_PARAM: 7,
            GENERATE_INDEXES_PARAM: true,
        });

        let (criteria, provision) = SearchAdapter::parse_parameters(&params).unwrap();
        assert_eq!(criteria.gene_id.as_deref(), Some("BRCA1"));
        assert_eq!(criteria.cluster_id, Some(7));
        assert!(provision);
    }

    #[test]
    fn test_mistyped_cluster_is_a_validation_error() {
        let err = SearchAdapter::parse_parameters(&json!({ CLUSTER_PARAM: -3 })).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_builder_defaults_carry_service_metadata() {
        let adapter = SearchAdapter::builder()
            .store(Arc::new(crate::store::InMemoryStore::new()))
            .build()
            .unwrap();

        assert_eq!(adapter.descriptor().name, SERVICE_NAME);
        assert_eq!(adapter.descriptor().alias, SERVICE_ALIAS);
        assert!(adapter.descriptor().info_uri.is_none());
    }
}
