//! Search response types

use crate::document::Document;
use crate::query::FacetCount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Search response with results and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching documents after sorting, pagination and highlighting
    pub hits: Vec<Document>,

    /// Total number of hits before pagination
    pub total: usize,

    /// Facet counts keyed by facet field (if facets were requested)
    pub facets: HashMap<String, Vec<FacetCount>>,

    /// Query execution time in milliseconds
    pub took_ms: u64,

    /// The original query text
    pub query: String,
}
