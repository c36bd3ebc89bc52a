//! Query-term highlighting

use crate::document::Document;
use regex::Regex;

/// Wrap every query term, case-insensitively, in the configured markup inside
/// both title and content. Operates on the display copy handed back to the
/// caller; stored documents are never touched.
pub(crate) fn highlight_document(document: &mut Document, terms: &[String], pre: &str, post: &str) {
    for term in terms {
        if term.is_empty() {
            continue;
        }
        // Terms are escaped so regex metacharacters match literally
        let pattern = match Regex::new(&format!("(?i){}", regex::escape(term))) {
            Ok(pattern) => pattern,
            Err(_) => continue,
        };
        document.title = wrap_matches(&pattern, &document.title, pre, post);
        document.content = wrap_matches(&pattern, &document.content, pre, post);
    }
}

fn wrap_matches(pattern: &Regex, text: &str, pre: &str, post: &str) -> String {
    pattern
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}{}", pre, &caps[0], post)
        })
        .into_owned()
}
