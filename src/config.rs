//! Engine configuration

use serde::{Deserialize, Serialize};

/// Search engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Index name assigned to documents indexed without one
    pub default_index: String,

    /// Page size used when a query does not set one
    pub default_page_size: usize,

    /// Maximum search results per page
    pub max_results: usize,

    /// Markup inserted before a highlighted term
    pub highlight_pre_tag: String,

    /// Markup inserted after a highlighted term
    pub highlight_post_tag: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_index: "default".to_string(),
            default_page_size: 10,
            max_results: 1000,
            highlight_pre_tag: "<mark>".to_string(),
            highlight_post_tag: "</mark>".to_string(),
        }
    }
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn default_index(mut self, index: impl Into<String>) -> Self {
        self.config.default_index = index.into();
        self
    }

    pub fn default_page_size(mut self, size: usize) -> Self {
        self.config.default_page_size = size;
        self
    }

    pub fn max_results(mut self, max: usize) -> Self {
        self.config.max_results = max;
        self
    }

    pub fn highlight_tags(mut self, pre: impl Into<String>, post: impl Into<String>) -> Self {
        self.config.highlight_pre_tag = pre.into();
        self.config.highlight_post_tag = post.into();
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.default_index, "default");
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.highlight_pre_tag, "<mark>");
        assert_eq!(config.highlight_post_tag, "</mark>");
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfigBuilder::new()
            .default_index("main")
            .default_page_size(25)
            .max_results(500)
            .highlight_tags("<em>", "</em>")
            .build();

        assert_eq!(config.default_index, "main");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_results, 500);
        assert_eq!(config.highlight_pre_tag, "<em>");
    }
}
