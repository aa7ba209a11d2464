//! Conjunctive equality filter construction

use crate::models::{CLUSTER_ID_FIELD, GENE_ID_FIELD};
use crate::search::criteria::SearchCriteria;
use crate::search::error::SearchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The store-native representation of all present criteria, interpreted
/// as a logical AND of per-field equality constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(Map<String, Value>);

impl Filter {
    /// Constraint for a named field, if any
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Number of constrained fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the filter constrains nothing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, value)` constraints
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn insert(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }
}

/// Builds a [`Filter`] from a sparse [`SearchCriteria`].
///
/// Purely functional: no side effects beyond the returned filter.
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Translate the present criteria into equality constraints on the
    /// canonical store-side field names.
    ///
    /// Fails when a present value cannot be encoded for the wire
    /// format; the error names the field and the attempted value.
    pub fn build(criteria: &SearchCriteria) -> Result<Filter, SearchError> {
        let mut filter = Filter::default();

        if let Some(ref gene_id) = criteria.gene_id {
            filter.insert(GENE_ID_FIELD, Self::encode_gene_id(gene_id)?);
        }

        if let Some(cluster_id) = criteria.cluster_id {
            filter.insert(CLUSTER_ID_FIELD, Self::encode_cluster_id(cluster_id)?);
        }

        Ok(filter)
    }

    /// Gene identifiers travel as C strings on the wire, so an interior
    /// NUL byte cannot be represented.
    fn encode_gene_id(gene_id: &str) -> Result<Value, SearchError> {
        if gene_id.contains('\0') {
            return Err(SearchError::QueryConstruction {
                field: GENE_ID_FIELD,
                value: gene_id.escape_default().to_string(),
                reason: "contains an interior NUL byte".to_string(),
            });
        }

        Ok(Value::String(gene_id.to_string()))
    }

    /// Cluster identifiers travel as signed 64-bit integers on the wire.
    fn encode_cluster_id(cluster_id: u64) -> Result<Value, SearchError> {
        let encoded = i64::try_from(cluster_id).map_err(|_| SearchError::QueryConstruction {
            field: CLUSTER_ID_FIELD,
            value: cluster_id.to_string(),
            reason: "exceeds the signed 64-bit wire range".to_string(),
        })?;

        Ok(Value::from(encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_field_constrains_only_that_field() {
        let filter = PredicateBuilder::build(&SearchCriteria::new().with_gene_id("BRCA1")).unwrap();

        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get(GENE_ID_FIELD), Some(&json!("BRCA1")));
        assert_eq!(filter.get(CLUSTER_ID_FIELD), None);

        let filter = PredicateBuilder::build(&SearchCriteria::new().with_cluster_id(7)).unwrap();

        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get(CLUSTER_ID_FIELD), Some(&json!(7)));
        assert_eq!(filter.get(GENE_ID_FIELD), None);
    }

    #[test]
    fn test_both_fields_form_a_conjunction() {
        let criteria = SearchCriteria::new().with_gene_id("BRCA1").with_cluster_id(7);
        let filter = PredicateBuilder::build(&criteria).unwrap();

        assert_eq!(filter.len(), 2);
        assert_eq!(filter.get(GENE_ID_FIELD), Some(&json!("BRCA1")));
        assert_eq!(filter.get(CLUSTER_ID_FIELD), Some(&json!(7)));
    }

    #[test]
    fn test_empty_criteria_build_an_open_filter() {
        let filter = PredicateBuilder::build(&SearchCriteria::new()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_nul_in_gene_id_is_rejected() {
        let criteria = SearchCriteria::new().with_gene_id("BRC\0A1");
        let err = PredicateBuilder::build(&criteria).unwrap_err();

        match err {
            SearchError::QueryConstruction { field, .. } => assert_eq!(field, GENE_ID_FIELD),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_oversized_cluster_id_is_rejected() {
        let criteria = SearchCriteria::new().with_cluster_id(u64::MAX);
        let err = PredicateBuilder::build(&criteria).unwrap_err();

        match err {
            SearchError::QueryConstruction { field, value, .. } => {
                assert_eq!(field, CLUSTER_ID_FIELD);
                assert_eq!(value, u64::MAX.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_boundary_cluster_id_encodes() {
        let criteria = SearchCriteria::new().with_cluster_id(i64::MAX as u64);
        let filter = PredicateBuilder::build(&criteria).unwrap();
        assert_eq!(filter.get(CLUSTER_ID_FIELD), Some(&json!(i64::MAX)));
    }
}
