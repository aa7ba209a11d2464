//! In-memory document store (for development and testing)

use crate::models::MatchedRecord;
use crate::search::{Filter, IndexSpec};
use crate::store::{DocumentStore, ProvisionStatus, StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory document store backed by a sequence-keyed map.
///
/// Records are returned in insertion order, matching the stable cursor
/// order of a disk-backed collection. The failure hooks let tests drive
/// the recoverable and fatal error paths without a real backend.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<DashMap<u64, MatchedRecord>>,
    indexes: Arc<DashMap<String, IndexSpec>>,
    sequence: Arc<AtomicU64>,
    fail_next_find: Arc<AtomicBool>,
    failing_index_fields: Arc<DashSet<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store pre-populated from a JSON file holding an array of
    /// records.
    pub async fn from_json_file(path: &Path) -> StoreResult<Self> {
        let raw = tokio::fs::read_to_string(path).await?;
        let records: Vec<Value> = serde_json::from_str(&raw)?;

        let store = Self::new();
        for record in records {
            store.insert(MatchedRecord(record)).await?;
        }

        Ok(store)
    }

    /// Make the next `find` call fail (test hook)
    pub fn fail_next_find(&self) {
        self.fail_next_find.store(true, Ordering::SeqCst);
    }

    /// Make `ensure_index` fail for the named field (test hook)
    pub fn fail_index_for(&self, field: impl Into<String>) {
        self.failing_index_fields.insert(field.into());
    }

    /// Names of the indexes currently provisioned
    pub fn index_fields(&self) -> Vec<String> {
        self.indexes.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matches(record: &MatchedRecord, filter: &Filter) -> bool {
        filter
            .iter()
            .all(|(field, expected)| record.0.get(field) == Some(expected))
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find(&self, filter: &Filter) -> StoreResult<Vec<MatchedRecord>> {
        if self.fail_next_find.swap(false, Ordering::SeqCst) {
            return Err(StoreError::QueryFailed(
                "injected find failure".to_string(),
            ));
        }

        let mut matched: Vec<(u64, MatchedRecord)> = self
            .records
            .iter()
            .filter(|entry| Self::matches(entry.value(), filter))
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        // Restore insertion order; DashMap iteration order is arbitrary.
        matched.sort_by_key(|(seq, _)| *seq);

        tracing::debug!(matches = matched.len(), ?filter, "find completed");

        Ok(matched.into_iter().map(|(_, record)| record).collect())
    }

    async fn ensure_index(&self, spec: &IndexSpec) -> StoreResult<ProvisionStatus> {
        if self.failing_index_fields.contains(&spec.field) {
            return Err(StoreError::IndexCreationFailed(format!(
                "injected index failure for {}",
                spec.field
            )));
        }

        if let Some(existing) = self.indexes.get(&spec.field) {
            if existing.value() == spec {
                return Ok(ProvisionStatus::AlreadyExists);
            }
            return Err(StoreError::IndexCreationFailed(format!(
                "index on {} already exists with different options",
                spec.field
            )));
        }

        self.indexes.insert(spec.field.clone(), spec.clone());
        tracing::debug!(field = %spec.field, "index created");

        Ok(ProvisionStatus::Created)
    }

    async fn insert(&self, record: MatchedRecord) -> StoreResult<()> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.records.insert(seq, record);
        Ok(())
    }
}
