//! Facet aggregation over result sets

use crate::document::Document;
use crate::query::FacetCount;
use std::collections::HashMap;

const FACET_TYPE: &str = "type";
const FACET_TAGS: &str = "tags";
const FACET_INDEX: &str = "index";

/// Compute value counts for each requested facet field across the
/// pre-pagination result set.
///
/// Unrecognized fields produce an empty list, not an error. Items are sorted
/// by descending count; ties are unordered.
pub(crate) fn aggregate(
    documents: &[Document],
    fields: &[String],
) -> HashMap<String, Vec<FacetCount>> {
    let mut facets = HashMap::new();

    for field in fields {
        let mut counts: HashMap<&str, u64> = HashMap::new();

        match field.as_str() {
            FACET_TYPE => {
                for doc in documents {
                    // Documents without a type contribute nothing
                    if !doc.doc_type.is_empty() {
                        *counts.entry(doc.doc_type.as_str()).or_insert(0) += 1;
                    }
                }
            }
            FACET_TAGS => {
                for doc in documents {
                    for tag in &doc.tags {
                        *counts.entry(tag.as_str()).or_insert(0) += 1;
                    }
                }
            }
            FACET_INDEX => {
                for doc in documents {
                    *counts.entry(doc.index.as_str()).or_insert(0) += 1;
                }
            }
            _ => {}
        }

        let mut items: Vec<FacetCount> = counts
            .into_iter()
            .map(|(value, count)| FacetCount {
                value: value.to_string(),
                count,
            })
            .collect();
        items.sort_by(|a, b| b.count.cmp(&a.count));

        facets.insert(field.clone(), items);
    }

    facets
}
