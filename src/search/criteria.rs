//! Typed search criteria

use serde::{Deserialize, Serialize};

/// The sparse set of typed criteria for one search invocation.
///
/// Every field is optional; absent fields leave the corresponding
/// document field unconstrained. At least one field must be present for
/// a query to be attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Gene identifier to match exactly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_id: Option<String>,

    /// Cluster identifier to match exactly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<u64>,
}

impl SearchCriteria {
    /// Create empty criteria (matches nothing until a field is set)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the gene identifier
    pub fn with_gene_id(mut self, gene_id: impl Into<String>) -> Self {
        self.gene_id = Some(gene_id.into());
        self
    }

    /// Constrain the cluster identifier
    pub fn with_cluster_id(mut self, cluster_id: u64) -> Self {
        self.cluster_id = Some(cluster_id);
        self
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.gene_id.is_none() && self.cluster_id.is_none()
    }

    /// The present criterion values in fixed field order (gene, then
    /// cluster), rendered as strings. Used for labeling and diagnostics.
    pub fn value_strings(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(2);
        if let Some(ref gene_id) = self.gene_id {
            values.push(gene_id.clone());
        }
        if let Some(cluster_id) = self.cluster_id {
            values.push(cluster_id.to_string());
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_emptiness() {
        assert!(SearchCriteria::new().is_empty());

        let criteria = SearchCriteria::new().with_gene_id("BRCA1").with_cluster_id(7);
        assert!(!criteria.is_empty());
        assert_eq!(criteria.gene_id.as_deref(), Some("BRCA1"));
        assert_eq!(criteria.cluster_id, Some(7));
    }

    #[test]
    fn test_value_strings_fixed_order() {
        let criteria = SearchCriteria::new().with_cluster_id(4).with_gene_id("BRCA1");
        assert_eq!(criteria.value_strings(), vec!["BRCA1", "4"]);

        let cluster_only = SearchCriteria::new().with_cluster_id(4);
        assert_eq!(cluster_only.value_strings(), vec!["4"]);

        assert!(SearchCriteria::new().value_strings().is_empty());
    }
}
