//! In-memory full-text search and faceted retrieval engine
//!
//! This crate provides a self-contained search library with no outbound
//! dependency on storage, network or logging systems, including:
//!
//! - **Ranked Text Queries**: transparent term scoring with title, content
//!   and tag weights plus verbatim phrase boosting
//! - **Faceted Search**: value counts over type, tags and index fields
//! - **Highlighting**: case-insensitive query-term markup in results
//! - **Sorting & Pagination**: stable multi-key sort and windowed results
//! - **Partial Updates**: typed field patches with point-in-time timestamps
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          SearchEngine capability trait           │
//! ├─────────────────────────────────────────────────┤
//! │  - index()          - search()                   │
//! │  - delete()         - delete_index()             │
//! │  - get_document()   - update_document()          │
//! └─────────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────────┐
//! │              InMemoryEngine                      │
//! ├─────────────────────────────────────────────────┤
//! │  - Document Store (id -> document)               │
//! │  - Index Buckets  (index -> member ids)          │
//! │  - One RwLock over the combined state            │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Tokenization is case-insensitive whitespace splitting; ranking is a fixed,
//! explainable scoring function rather than a probabilistic model, so every
//! score can be reproduced by hand.
//!
//! # Example
//!
//! ```no_run
//! use memsearch::{Document, InMemoryEngine, Query, SearchEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = InMemoryEngine::new();
//!
//!     engine
//!         .index(
//!             Document::new("1", "Go concurrency patterns", "Channels and goroutines")
//!                 .with_tags(vec!["go", "concurrency"]),
//!         )
//!         .await?;
//!
//!     let query = Query::builder("concurrency")
//!         .with_highlight(true)
//!         .with_facets(vec!["tags"])
//!         .build();
//!
//!     let results = engine.search(&query).await?;
//!     println!("{} hits in {}ms", results.total, results.took_ms);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod query;
pub mod response;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use document::{Document, DocumentPatch};
pub use engine::{InMemoryEngine, IndexStats, SearchEngine};
pub use error::{SearchError, SearchResult};
pub use query::{FacetCount, Query, QueryBuilder, SortOrder, SortSpec};
pub use response::SearchResponse;
