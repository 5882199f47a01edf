//! Free-text search over review content.
//!
//! The KMP matcher is case-sensitive; this layer owns the
//! case-insensitivity policy by case-folding both the review body and the
//! query before matching. The fold maps each char to a single char, so a
//! match offset in the folded body is also a char offset into the
//! original. `str::to_lowercase` would not give that guarantee: it can
//! expand one char into several ('İ' becomes "i\u{307}"), shifting every
//! later offset.

mod kmp;

pub use kmp::{failure_table, find_occurrences};

use serde::{Deserialize, Serialize};

/// A review record as supplied by the surrounding application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub train: Option<String>,
    pub body: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// One review that matched the query, with highlight offsets.
///
/// Offsets are char positions into the original body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewMatch {
    pub id: String,
    pub body: String,
    pub offsets: Vec<usize>,
}

/// Lower-case `text` char by char, keeping a 1:1 char correspondence with
/// the input. Chars whose lowercase form is longer than one char are kept
/// as their first lowered char.
fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Search the review corpus for a keyword, case-insensitively.
///
/// Reviews without a match are omitted. An empty query matches nothing.
pub fn search_reviews(reviews: &[Review], query: &str) -> Vec<ReviewMatch> {
    let query = fold_case(query);
    if query.is_empty() {
        return Vec::new();
    }

    reviews
        .iter()
        .filter_map(|review| {
            let offsets = find_occurrences(&fold_case(&review.body), &query);
            if offsets.is_empty() {
                None
            } else {
                Some(ReviewMatch {
                    id: review.id.clone(),
                    body: review.body.clone(),
                    offsets,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, body: &str) -> Review {
        Review {
            id: id.to_string(),
            train: None,
            body: body.to_string(),
            rating: None,
        }
    }

    #[test]
    fn finds_matches_case_insensitively() {
        let reviews = vec![
            review("r1", "The Train was spotless"),
            review("r2", "awful food"),
            review("r3", "train late, train dirty"),
        ];

        let matches = search_reviews(&reviews, "TRAIN");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].id, "r1");
        assert_eq!(matches[0].offsets, vec![4]);
        assert_eq!(matches[1].id, "r3");
        assert_eq!(matches[1].offsets, vec![0, 12]);
    }

    #[test]
    fn non_matching_reviews_are_omitted() {
        let reviews = vec![review("r1", "quiet coach")];
        assert!(search_reviews(&reviews, "noisy").is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let reviews = vec![review("r1", "anything")];
        assert!(search_reviews(&reviews, "").is_empty());
    }

    #[test]
    fn multi_char_lowercase_does_not_shift_offsets() {
        // 'İ' lower-cases to two chars ("i\u{307}"); offsets must still
        // point into the original body.
        let reviews = vec![review("r1", "İstanbul Express was superb")];

        let matches = search_reviews(&reviews, "superb");
        assert_eq!(matches.len(), 1);

        let body: Vec<char> = matches[0].body.chars().collect();
        let offset = matches[0].offsets[0];
        assert_eq!(body[offset..offset + 6].iter().collect::<String>(), "superb");

        // The folded char itself still matches case-insensitively
        let matches = search_reviews(&reviews, "istanbul");
        assert_eq!(matches[0].offsets, vec![0]);
    }

    #[test]
    fn original_body_is_preserved_in_the_match() {
        let reviews = vec![review("r1", "Clean and Fast")];
        let matches = search_reviews(&reviews, "clean");
        assert_eq!(matches[0].body, "Clean and Fast");
        assert_eq!(matches[0].offsets, vec![0]);
    }
}
