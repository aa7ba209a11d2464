//! Error types for search operations

use serde::Serialize;

/// Errors that can occur during a search invocation.
///
/// Fatal kinds (`QueryConstruction`, `QueryExecution`) abort the search
/// with a `Failed` outcome. Recoverable kinds (`ResultConversion`,
/// `IndexProvision`) are accumulated as diagnostics on the response
/// while the search continues. `EmptyCriteria` means nothing was
/// attempted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SearchError {
    /// No usable filter fields were supplied
    #[error("no search criteria supplied, nothing to query")]
    EmptyCriteria,

    /// A criterion could not be encoded into the filter document
    #[error("cannot encode criterion {field}={value:?}: {reason}")]
    QueryConstruction {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The store call failed
    #[error("query execution failed: {0}")]
    QueryExecution(String),

    /// One matched record could not be turned into a result
    #[error("failed to convert record {ordinal} (criteria: {criteria}) into a result: {reason}")]
    ResultConversion {
        ordinal: usize,
        criteria: String,
        reason: String,
    },

    /// One index spec failed to provision
    #[error("failed to create index on {field} in {database}.{collection}: {reason}")]
    IndexProvision {
        field: String,
        database: String,
        collection: String,
        reason: String,
    },
}

impl SearchError {
    /// Whether the search can continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SearchError::ResultConversion { .. } | SearchError::IndexProvision { .. }
        )
    }
}
