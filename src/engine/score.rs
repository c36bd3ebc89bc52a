//! Term scoring and phrase boosting

use crate::document::Document;

const TITLE_WEIGHT: f32 = 2.0;
const CONTENT_WEIGHT: f32 = 1.0;
const TAG_WEIGHT: f32 = 1.5;
const TITLE_PHRASE_BOOST: f32 = 2.0;
const CONTENT_PHRASE_BOOST: f32 = 1.5;

/// Split query text on whitespace and lowercase every token
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Score one candidate against the tokenized query.
///
/// Occurrence counts are literal substring counts, so a query word embedded in
/// a longer word still matches. A title or content containing the full query
/// string verbatim multiplies the accumulated per-term score.
pub(crate) fn score_document(document: &Document, terms: &[String], phrase: &str) -> f32 {
    let title = document.title.to_lowercase();
    let content = document.content.to_lowercase();

    let mut score = 0.0;
    for term in terms {
        score += TITLE_WEIGHT * title.matches(term.as_str()).count() as f32;
        score += CONTENT_WEIGHT * content.matches(term.as_str()).count() as f32;
        if document
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term.as_str()))
        {
            score += TAG_WEIGHT;
        }
    }

    if title.contains(phrase) {
        score *= TITLE_PHRASE_BOOST;
    } else if content.contains(phrase) {
        score *= CONTENT_PHRASE_BOOST;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(doc: &Document, text: &str) -> f32 {
        score_document(doc, &tokenize(text), &text.to_lowercase())
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Hello  World"), vec!["hello", "world"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_title_outweighs_content() {
        let in_title = Document::new("1", "database outage", "");
        let in_content = Document::new("2", "", "database outage");

        assert!(scored(&in_title, "database") > scored(&in_content, "database"));
    }

    #[test]
    fn test_repeated_terms_score_higher() {
        let twice = Document::new("1", "hello hello", "same body");
        let once = Document::new("2", "hello", "same body");

        assert!(scored(&twice, "hello") > scored(&once, "hello"));
    }

    #[test]
    fn test_substring_occurrences_count() {
        // "cat" occurs inside "concatenate" as a plain substring
        let doc = Document::new("1", "concatenate strings", "");
        assert!(scored(&doc, "cat") > 0.0);
    }

    #[test]
    fn test_tag_match_is_flat_per_term() {
        let one_hit = Document::new("1", "", "").with_tags(vec!["networking"]);
        let two_hits = Document::new("2", "", "").with_tags(vec!["networking", "network"]);

        // A term matching several tags still contributes once
        assert_eq!(scored(&one_hit, "network"), scored(&two_hits, "network"));
    }

    #[test]
    fn test_title_phrase_boost_doubles_term_sum() {
        let doc = Document::new("1", "kernel panic on boot", "");
        let terms = tokenize("kernel panic");
        let unboosted: f32 = 2.0 * 2.0; // two title terms, one occurrence each

        let boosted = score_document(&doc, &terms, "kernel panic");
        assert_eq!(boosted, unboosted * 2.0);
    }

    #[test]
    fn test_content_phrase_boost_is_weaker() {
        let in_title = Document::new("1", "kernel panic", "");
        let in_content = Document::new("2", "", "kernel panic");

        let terms = tokenize("kernel panic");
        let title_score = score_document(&in_title, &terms, "kernel panic");
        let content_score = score_document(&in_content, &terms, "kernel panic");

        assert_eq!(title_score, (2.0 + 2.0) * 2.0);
        assert_eq!(content_score, (1.0 + 1.0) * 1.5);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let doc = Document::new("1", "unrelated", "nothing here").with_tags(vec!["misc"]);
        assert_eq!(scored(&doc, "database"), 0.0);
    }
}
