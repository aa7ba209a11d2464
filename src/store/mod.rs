//! Document-store capability seam
//!
//! The search core never owns a store connection. It is handed a narrow
//! "query this filter, get these records" capability at call time, and
//! the host decides what backs it. Implementations must be safe for
//! concurrent independent queries; the core performs no locking of its
//! own.

pub mod memory;

pub use memory::InMemoryStore;

use crate::models::MatchedRecord;
use crate::search::{Filter, IndexSpec};
use async_trait::async_trait;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by a [`DocumentStore`] implementation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The query could not be executed
    #[error("query execution failed: {0}")]
    QueryFailed(String),

    /// An index could not be created
    #[error("index creation failed: {0}")]
    IndexCreationFailed(String),

    /// The store rejected a record on insert
    #[error("insert failed: {0}")]
    InsertFailed(String),

    /// IO error from the backing medium
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of an idempotent index-provisioning call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStatus {
    /// The index was created by this call
    Created,

    /// An index with matching options already existed; no-op
    AlreadyExists,
}

/// Narrow query capability over a document collection.
///
/// Implementations must support concurrent independent calls; every
/// method takes `&self` and the trait is `Send + Sync` so a single
/// handle can be shared across invocations behind an `Arc`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Retrieve every record matching the filter, in store order, as
    /// one materialized result set.
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<MatchedRecord>>;

    /// Ensure a supporting index exists for the spec. Re-invocation
    /// with matching options is a no-op success; an existing index with
    /// different options fails this call only.
    async fn ensure_index(&self, spec: &IndexSpec) -> StoreResult<ProvisionStatus>;

    /// Insert a record into the collection
    async fn insert(&self, record: MatchedRecord) -> StoreResult<()>;
}
