//! Document model and partial updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// The atomic unit of content the engine indexes and retrieves
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Document {
    /// Caller-assigned identifier, unique within the engine
    #[validate(length(min = 1))]
    pub id: String,

    /// Named partition this document belongs to (defaulted at indexing time when empty)
    #[serde(default)]
    pub index: String,

    /// Optional classification
    #[serde(default, rename = "type")]
    pub doc_type: String,

    /// Title, weighted highest by the scorer
    #[serde(default)]
    pub title: String,

    /// Body text
    #[serde(default)]
    pub content: String,

    /// Tags, filtered with any-of semantics and faceted individually
    #[serde(default)]
    pub tags: Vec<String>,

    /// Arbitrary caller metadata, not consulted by the scorer
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Indexing time unless the caller sets it
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Relevance score, only meaningful on query results
    #[serde(default)]
    pub score: f32,
}

impl Document {
    /// Create a new document
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            index: String::new(),
            doc_type: String::new(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            metadata: HashMap::new(),
            timestamp: None,
            score: 0.0,
        }
    }

    /// Assign the document to a named index
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Set the classification type
    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    /// Attach caller metadata
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Pin the timestamp instead of defaulting it at indexing time
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Partial field update applied by `update_document`.
///
/// A `None` field leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl DocumentPatch {
    /// Start an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(|t| t.into()).collect());
        self
    }

    pub fn metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Copy every set field onto the document
    pub fn apply_to(&self, document: &mut Document) {
        if let Some(ref title) = self.title {
            document.title = title.clone();
        }
        if let Some(ref content) = self.content {
            document.content = content.clone();
        }
        if let Some(ref tags) = self.tags {
            document.tags = tags.clone();
        }
        if let Some(ref metadata) = self.metadata {
            document.metadata = metadata.clone();
        }
    }
}
