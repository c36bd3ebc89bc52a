//! Search query building

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort order for a single sort key
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One sort criterion.
///
/// Recognized fields are `score`, `timestamp` and `title`; anything else is a
/// no-op tie that falls through to the next criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,

    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// Facet count result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

/// Main search query structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
    /// Query text; empty means no ranking, every filtered candidate matches
    #[serde(default)]
    pub text: String,

    /// Restrict candidates to one named index
    #[serde(default)]
    pub index: Option<String>,

    /// Exact-match type filter
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,

    /// Any-of tag filter; empty means no tag filtering
    #[serde(default)]
    pub tags: Vec<String>,

    /// Reserved for structured filters; not consulted by the scoring path
    #[serde(default)]
    pub filters: HashMap<String, serde_json::Value>,

    /// Pagination offset
    #[serde(default)]
    pub from: usize,

    /// Page size; zero means the engine default
    #[serde(default)]
    pub size: usize,

    /// Sort criteria, replacing the default descending-score order when set
    #[serde(default)]
    pub sort: Vec<SortSpec>,

    /// Wrap matched query terms in markup on returned hits
    #[serde(default)]
    pub highlight: bool,

    /// Facet fields to aggregate over the pre-pagination result set
    #[serde(default)]
    pub facets: Vec<String>,
}

impl Query {
    /// Create a query with the given text and default everything else
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Start a fluent builder for this query text
    pub fn builder(text: impl Into<String>) -> QueryBuilder {
        QueryBuilder::new(text)
    }
}

/// Fluent accumulator assembling a `Query`.
///
/// Purely structural; validation happens at execution time.
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            query: Query::new(text),
        }
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.query.index = Some(index.into());
        self
    }

    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.query.doc_type = Some(doc_type.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<impl Into<String>>) -> Self {
        self.query.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn with_pagination(mut self, from: usize, size: usize) -> Self {
        self.query.from = from;
        self.query.size = size;
        self
    }

    /// Append one sort criterion; earlier criteria take precedence
    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.query.sort.push(SortSpec::new(field, order));
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.query.highlight = highlight;
        self
    }

    pub fn with_facets(mut self, facets: Vec<impl Into<String>>) -> Self {
        self.query.facets = facets.into_iter().map(|f| f.into()).collect();
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = Query::new("database error");
        assert_eq!(query.text, "database error");
        assert!(query.index.is_none());
        assert_eq!(query.from, 0);
        assert_eq!(query.size, 0);
        assert!(query.sort.is_empty());
        assert!(!query.highlight);
    }

    #[test]
    fn test_query_builder() {
        let query = Query::builder("database error")
            .with_index("incidents")
            .with_type("outage")
            .with_tags(vec!["db", "prod"])
            .with_pagination(10, 50)
            .with_highlight(true)
            .with_facets(vec!["tags", "type"])
            .build();

        assert_eq!(query.text, "database error");
        assert_eq!(query.index.as_deref(), Some("incidents"));
        assert_eq!(query.doc_type.as_deref(), Some("outage"));
        assert_eq!(query.tags.len(), 2);
        assert_eq!(query.from, 10);
        assert_eq!(query.size, 50);
        assert!(query.highlight);
        assert_eq!(query.facets, vec!["tags".to_string(), "type".to_string()]);
    }

    #[test]
    fn test_with_sort_appends() {
        let query = Query::builder("error")
            .with_sort("score", SortOrder::Desc)
            .with_sort("title", SortOrder::Asc)
            .build();

        assert_eq!(query.sort.len(), 2);
        assert_eq!(query.sort[0].field, "score");
        assert_eq!(query.sort[0].order, SortOrder::Desc);
        assert_eq!(query.sort[1].field, "title");
        assert_eq!(query.sort[1].order, SortOrder::Asc);
    }
}
