//! Engine capability surface and backends
//!
//! The engine boundary is a small operation set, not a wire protocol: upsert,
//! ranked search, point lookup, partial update and deletion. `SearchEngine`
//! is the capability trait; [`InMemoryEngine`] is the one conforming backend,
//! holding the document store and the index buckets behind a single
//! reader/writer lock so every mutation commits to both maps or neither.

mod facet;
mod highlight;
mod memory;
mod score;

pub use memory::InMemoryEngine;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentPatch};
use crate::error::SearchResult;
use crate::query::Query;
use crate::response::SearchResponse;

/// Engine statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total number of stored documents
    pub total_documents: usize,

    /// Number of named indices holding at least one bucket entry
    pub total_indices: usize,
}

/// Capability surface implemented by search backends
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Upsert a document into the store and its index bucket
    async fn index(&self, document: Document) -> SearchResult<()>;

    /// Upsert a batch of documents in one critical section, returning the
    /// number indexed; the whole batch is rejected if any document is invalid
    async fn index_batch(&self, documents: Vec<Document>) -> SearchResult<usize>;

    /// Execute a query: filter, score, facet, sort, paginate, highlight
    async fn search(&self, query: &Query) -> SearchResult<SearchResponse>;

    /// Remove a document by id
    async fn delete(&self, id: &str) -> SearchResult<()>;

    /// Remove a named index and every document it references; a no-op when
    /// the index does not exist
    async fn delete_index(&self, index: &str) -> SearchResult<()>;

    /// Fetch an owned copy of a stored document
    async fn get_document(&self, id: &str) -> SearchResult<Document>;

    /// Apply a partial field patch and refresh the document timestamp
    async fn update_document(&self, id: &str, patch: DocumentPatch) -> SearchResult<()>;

    /// Drop every document and index bucket
    async fn clear(&self) -> SearchResult<()>;

    /// Engine statistics
    async fn stats(&self) -> SearchResult<IndexStats>;

    /// Sorted names of the known indices
    async fn list_indices(&self) -> SearchResult<Vec<String>>;
}
