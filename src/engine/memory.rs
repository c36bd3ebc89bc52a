//! In-memory search backend

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::config::SearchConfig;
use crate::document::{Document, DocumentPatch};
use crate::engine::{facet, highlight, score, IndexStats, SearchEngine};
use crate::error::{SearchError, SearchResult};
use crate::query::{Query, SortOrder, SortSpec};
use crate::response::SearchResponse;

/// Combined document store and index-bucket state.
///
/// Guarded as one unit so every mutation commits to both maps or neither.
#[derive(Default)]
struct EngineState {
    /// Authoritative id -> document mapping
    documents: HashMap<String, Document>,

    /// Index name -> member document ids
    buckets: HashMap<String, HashSet<String>>,
}

/// In-memory search engine.
///
/// Writers (`index`, `delete`, `delete_index`, `update_document`) hold the
/// exclusive lock for their entire duration; `search` and `get_document` hold
/// the shared lock, so a long scan blocks writers but not other readers.
pub struct InMemoryEngine {
    state: RwLock<EngineState>,
    config: SearchConfig,
}

impl InMemoryEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            state: RwLock::new(EngineState::default()),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn prepare(&self, mut document: Document) -> SearchResult<Document> {
        document.validate()?;
        if document.index.is_empty() {
            document.index = self.config.default_index.clone();
        }
        if document.timestamp.is_none() {
            document.timestamp = Some(Utc::now());
        }
        Ok(document)
    }
}

impl Default for InMemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchEngine for InMemoryEngine {
    async fn index(&self, document: Document) -> SearchResult<()> {
        let document = self.prepare(document)?;

        let mut state = self.state.write().await;
        // Re-indexing under a new index name leaves the old bucket entry in
        // place; candidate resolution tolerates ids whose document is gone.
        state
            .buckets
            .entry(document.index.clone())
            .or_default()
            .insert(document.id.clone());
        tracing::debug!(document_id = %document.id, index = %document.index, "Document indexed");
        state.documents.insert(document.id.clone(), document);
        Ok(())
    }

    async fn index_batch(&self, documents: Vec<Document>) -> SearchResult<usize> {
        let documents = documents
            .into_iter()
            .map(|doc| self.prepare(doc))
            .collect::<SearchResult<Vec<_>>>()?;

        let mut state = self.state.write().await;
        let indexed = documents.len();
        for document in documents {
            state
                .buckets
                .entry(document.index.clone())
                .or_default()
                .insert(document.id.clone());
            state.documents.insert(document.id.clone(), document);
        }
        tracing::debug!(count = indexed, "Batch indexed");
        Ok(indexed)
    }

    async fn search(&self, query: &Query) -> SearchResult<SearchResponse> {
        let started = Instant::now();
        let state = self.state.read().await;

        // Candidate resolution: the scoped bucket, or the whole store
        let candidates: Vec<&Document> = match &query.index {
            Some(index) => state
                .buckets
                .get(index)
                .map(|ids| ids.iter().filter_map(|id| state.documents.get(id)).collect())
                .unwrap_or_default(),
            None => state.documents.values().collect(),
        };

        let mut matched: Vec<Document> = candidates
            .into_iter()
            .filter(|doc| match &query.doc_type {
                Some(doc_type) => doc.doc_type == *doc_type,
                None => true,
            })
            .filter(|doc| {
                query.tags.is_empty() || doc.tags.iter().any(|tag| query.tags.contains(tag))
            })
            .cloned()
            .collect();

        let terms = score::tokenize(&query.text);
        if !query.text.is_empty() {
            let phrase = query.text.to_lowercase();
            for doc in &mut matched {
                doc.score = score::score_document(doc, &terms, &phrase);
            }
            matched.retain(|doc| doc.score > 0.0);
            if query.sort.is_empty() {
                matched.sort_by(|a, b| b.score.total_cmp(&a.score));
            }
        }

        // Facets run over the filtered and scored set, before pagination
        let facets = if query.facets.is_empty() {
            HashMap::new()
        } else {
            facet::aggregate(&matched, &query.facets)
        };

        if !query.sort.is_empty() {
            sort_documents(&mut matched, &query.sort);
        }

        let total = matched.len();
        let size = match query.size {
            0 => self.config.default_page_size,
            size => size,
        }
        .min(self.config.max_results);
        let mut hits: Vec<Document> = matched.into_iter().skip(query.from).take(size).collect();

        if query.highlight && !query.text.is_empty() {
            for doc in &mut hits {
                highlight::highlight_document(
                    doc,
                    &terms,
                    &self.config.highlight_pre_tag,
                    &self.config.highlight_post_tag,
                );
            }
        }

        let took_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(query = %query.text, total, took_ms, "Search executed");

        Ok(SearchResponse {
            hits,
            total,
            facets,
            took_ms,
            query: query.text.clone(),
        })
    }

    async fn delete(&self, id: &str) -> SearchResult<()> {
        let mut state = self.state.write().await;
        let document = state
            .documents
            .remove(id)
            .ok_or_else(|| SearchError::DocumentNotFound(id.to_string()))?;
        if let Some(bucket) = state.buckets.get_mut(&document.index) {
            bucket.remove(id);
        }
        tracing::debug!(document_id = %id, index = %document.index, "Document deleted");
        Ok(())
    }

    async fn delete_index(&self, index: &str) -> SearchResult<()> {
        let mut state = self.state.write().await;
        if let Some(ids) = state.buckets.remove(index) {
            for id in &ids {
                state.documents.remove(id);
            }
            tracing::debug!(index = %index, count = ids.len(), "Index deleted");
        }
        Ok(())
    }

    async fn get_document(&self, id: &str) -> SearchResult<Document> {
        let state = self.state.read().await;
        state
            .documents
            .get(id)
            .cloned()
            .ok_or_else(|| SearchError::DocumentNotFound(id.to_string()))
    }

    async fn update_document(&self, id: &str, patch: DocumentPatch) -> SearchResult<()> {
        let mut state = self.state.write().await;
        let document = state
            .documents
            .get_mut(id)
            .ok_or_else(|| SearchError::DocumentNotFound(id.to_string()))?;
        patch.apply_to(document);
        document.timestamp = Some(Utc::now());
        tracing::debug!(document_id = %id, "Document updated");
        Ok(())
    }

    async fn clear(&self) -> SearchResult<()> {
        let mut state = self.state.write().await;
        state.documents.clear();
        state.buckets.clear();
        tracing::debug!("Engine cleared");
        Ok(())
    }

    async fn stats(&self) -> SearchResult<IndexStats> {
        let state = self.state.read().await;
        Ok(IndexStats {
            total_documents: state.documents.len(),
            total_indices: state.buckets.len(),
        })
    }

    async fn list_indices(&self) -> SearchResult<Vec<String>> {
        let state = self.state.read().await;
        let mut indices: Vec<String> = state.buckets.keys().cloned().collect();
        indices.sort();
        Ok(indices)
    }
}

/// Stable multi-key sort, evaluated in criterion order.
///
/// Unrecognized fields compare equal and fall through to the next criterion.
fn sort_documents(documents: &mut [Document], sort: &[SortSpec]) {
    documents.sort_by(|a, b| {
        for spec in sort {
            let ordering = match spec.field.as_str() {
                "score" => a.score.total_cmp(&b.score),
                "timestamp" => a.timestamp.cmp(&b.timestamp),
                "title" => a.title.cmp(&b.title),
                _ => Ordering::Equal,
            };
            let ordering = match spec.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}
