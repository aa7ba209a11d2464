//! Dynamic search over the gene-trees collection
//!
//! Given zero or more optional typed criteria, this module builds a
//! conjunctive equality filter, optionally provisions supporting
//! indexes (best-effort, per field), executes the query, converts each
//! matched document into a labeled result, and computes an aggregate
//! outcome reflecting partial failure.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchService                      │
//! │  provisioning → predicate → query → conversion  │
//! │             → outcome computation               │
//! └─────────────────────────────────────────────────┘
//!          │                │              │
//!          ▼                ▼              ▼
//!    IndexProvisioner  PredicateBuilder  result_title
//!          │                │
//!          └────────────────┴──▶ DocumentStore (injected)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gene_trees_search::config::ServiceConfig;
//! use gene_trees_search::search::{SearchCriteria, SearchService};
//! use gene_trees_search::store::InMemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(InMemoryStore::new());
//!     let service = SearchService::new(store, ServiceConfig::default());
//!
//!     let criteria = SearchCriteria::new().with_gene_id("BRCA1");
//!     let response = service.search_with_defaults(&criteria).await;
//!
//!     println!("{}: {} results", response.outcome, response.results.len());
//! }
//! ```

mod criteria;
mod error;
mod filter;
mod index;
mod label;
mod outcome;
mod service;

pub use criteria::SearchCriteria;
pub use error::SearchError;
pub use filter::{Filter, PredicateBuilder};
pub use index::{default_index_specs, IndexProvisioner, IndexSpec};
pub use label::{result_title, TITLE_SEPARATOR};
pub use outcome::Outcome;
pub use service::{SearchResponse, SearchResult, SearchService};
