//! # Gene Trees Search
//!
//! Dynamic search service over a gene-trees document collection: typed
//! optional criteria are translated into a conjunctive equality filter,
//! supporting indexes are provisioned on request (best-effort per
//! field), the query runs against an injected document store, and each
//! matched record is wrapped into a labeled result under an aggregate
//! outcome status that distinguishes full, partial, and total failure.
//!
//! The crate is organised as:
//!
//! - [`search`] — criteria, predicate construction, index provisioning,
//!   result labeling, and the orchestrating [`search::SearchService`].
//! - [`store`] — the [`store::DocumentStore`] capability seam plus an
//!   in-memory implementation for development and tests.
//! - [`api`] — the host-facing adapter carrying registration metadata
//!   and raw-parameter translation.
//! - [`config`], [`error`], [`models`] — ambient configuration, error,
//!   and document-model support.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{Result, ServiceError};
pub use search::{Outcome, SearchCriteria, SearchResponse, SearchResult, SearchService};
pub use store::{DocumentStore, InMemoryStore};
