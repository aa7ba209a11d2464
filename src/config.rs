//! Service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the gene-trees search service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name of the database holding the gene-trees data
    pub database: String,

    /// Name of the collection to query
    pub collection: String,

    /// Provision supporting indexes before searching (advanced, default off)
    #[serde(default)]
    pub provision_indexes: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database: "gene_trees".to_string(),
            collection: "genetrees".to_string(),
            provision_indexes: false,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file and environment.
    ///
    /// Reads the TOML file named by `GENE_TREES_CONFIG` (default
    /// `config/gene_trees.toml`) when present, then applies
    /// `GENE_TREES_`-prefixed environment overrides. The `database`
    /// and `collection` keys are required; there is no implicit
    /// fallback for a missing deployment configuration.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("GENE_TREES_CONFIG").unwrap_or_else(|_| "config/gene_trees.toml".to_string());

        config::Config::builder()
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("GENE_TREES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Builder for [`ServiceConfig`]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.config.database = database.into();
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.config.collection = collection.into();
        self
    }

    pub fn provision_indexes(mut self, enabled: bool) -> Self {
        self.config.provision_indexes = enabled;
        self
    }

    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
