//! Canonical gene-tree document fields and the opaque record wrapper

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-side key for the gene identifier
pub const GENE_ID_FIELD: &str = "gene_id";

/// Store-side key for the cluster identifier
pub const CLUSTER_ID_FIELD: &str = "cluster_id";

/// Store-side key for the serialized gene tree
pub const GENE_TREE_FIELD: &str = "genetree";

/// Store-side key for the gene sequence
pub const GENE_SEQUENCE_FIELD: &str = "gene_sequence";

/// Store-side key for the multiple sequence alignment
pub const ALIGNMENT_FIELD: &str = "alignment";

/// A document returned by the store for a given filter.
///
/// The search layer treats the content as opaque: it only needs to know
/// whether the payload is a JSON document so it can be wrapped into a
/// labeled result, and otherwise passes it through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchedRecord(pub Value);

impl MatchedRecord {
    /// Whether the record is a JSON document (as opposed to a bare
    /// scalar or array, which cannot be labeled and re-exposed)
    pub fn is_document(&self) -> bool {
        self.0.is_object()
    }

    /// Read a top-level string field, if present
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Unwrap into the underlying JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for MatchedRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_detection() {
        assert!(MatchedRecord(json!({"gene_id": "BRCA1"})).is_document());
        assert!(!MatchedRecord(json!("BRCA1")).is_document());
        assert!(!MatchedRecord(json!([1, 2, 3])).is_document());
    }

    #[test]
    fn test_field_access() {
        let record = MatchedRecord(json!({
            GENE_ID_FIELD: "BRCA1",
            GENE_TREE_FIELD: "((A,B),C);",
        }));

        assert_eq!(record.get_str(GENE_ID_FIELD), Some("BRCA1"));
        assert_eq!(record.get_str(GENE_SEQUENCE_FIELD), None);
    }
}
