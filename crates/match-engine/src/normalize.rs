//! Text normalization: raw document text to a canonical lowercase term set.
//!
//! The term set is the union of single tokens (length > 2, not purely
//! numeric) and adjacent-token bigrams whose halves each exceed 2
//! characters. The lowercased full text is kept alongside for substring
//! presence checks during scoring.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;

/// Tokens must be strictly longer than this to count as signal.
pub const MIN_TOKEN_LENGTH: usize = 2;

lazy_static! {
    /// Lowercase letter immediately followed by uppercase: camelCase boundary
    static ref CAMEL_CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();

    /// URLs and email-like tokens carry no skill signal
    static ref URL_OR_EMAIL: Regex = Regex::new(r"https?://\S+|\S+@\S+").unwrap();

    /// Everything that is not a word character, whitespace, or hyphen.
    /// Hyphens stay so "cross-functional" survives as one token.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s-]").unwrap();
}

/// A document reduced to its matchable vocabulary.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    /// Qualifying tokens and bigrams, in discovery order.
    pub terms: IndexSet<String>,
    /// Full lowercased text, used for substring matching.
    pub text_lower: String,
}

impl NormalizedDocument {
    pub fn new(raw: &str) -> Self {
        Self {
            terms: normalize(raw),
            text_lower: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Extract the matchable term set from raw document text.
///
/// Order matters: camelCase is split before lowercasing, and URLs/emails are
/// stripped before punctuation cleanup. Pure and total — malformed input
/// yields an empty or partial set, never an error.
pub fn normalize(raw: &str) -> IndexSet<String> {
    if raw.is_empty() {
        return IndexSet::new();
    }

    let spaced = CAMEL_CASE_BOUNDARY.replace_all(raw, "$1 $2");
    let stripped = URL_OR_EMAIL.replace_all(&spaced, "");
    let cleaned = NON_WORD.replace_all(&stripped, " ");
    let lowered = cleaned.to_lowercase();

    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let mut terms = IndexSet::new();
    for token in &tokens {
        if qualifies(token) {
            terms.insert((*token).to_string());
        }
    }

    // Bigrams are formed over the full token stream, before the length
    // filter drops anything; both halves must exceed the length floor.
    for pair in tokens.windows(2) {
        if exceeds_floor(pair[0]) && exceeds_floor(pair[1]) {
            terms.insert(format!("{} {}", pair[0], pair[1]));
        }
    }

    terms
}

fn exceeds_floor(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_LENGTH
}

fn qualifies(token: &str) -> bool {
    exceeds_floor(token) && !token.chars().all(|c| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_camel_case_before_lowercasing() {
        let terms = normalize("ProjectManager");
        assert!(terms.contains("project"));
        assert!(terms.contains("manager"));
        assert!(terms.contains("project manager"));
    }

    #[test]
    fn test_strips_urls_and_emails() {
        let terms = normalize("Contact jane@example.com or see https://example.com/cv for leadership");
        assert!(terms.contains("leadership"));
        assert!(!terms.iter().any(|t| t.contains("example")));
        assert!(!terms.iter().any(|t| t.contains("http")));
    }

    #[test]
    fn test_preserves_hyphenated_tokens() {
        let terms = normalize("Led cross-functional delivery");
        assert!(terms.contains("cross-functional"));
    }

    #[test]
    fn test_drops_short_and_numeric_tokens() {
        let terms = normalize("a to 12345 go agile");
        assert!(terms.contains("agile"));
        assert!(!terms.contains("12345"));
        assert!(!terms.contains("to"));
        assert!(!terms.contains("go"));
    }

    #[test]
    fn test_builds_adjacent_bigrams() {
        let terms = normalize("senior project manager");
        assert!(terms.contains("senior project"));
        assert!(terms.contains("project manager"));
        // Non-adjacent pairs are not formed
        assert!(!terms.contains("senior manager"));
    }

    #[test]
    fn test_bigrams_skip_short_halves() {
        let terms = normalize("go agile now");
        assert!(!terms.contains("go agile"));
        assert!(terms.contains("agile now"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        let terms = normalize("agile/scrum,kanban");
        assert!(terms.contains("agile"));
        assert!(terms.contains("scrum"));
        assert!(terms.contains("kanban"));
    }

    #[test]
    fn test_normalized_document_keeps_lowercased_text() {
        let doc = NormalizedDocument::new("Senior SCRUM Master");
        assert_eq!(doc.text_lower, "senior scrum master");
        assert!(!doc.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Every produced term is fully lowercase for alphabetic input.
            #[test]
            fn terms_are_lowercase(raw in "[a-zA-Z ]{0,120}") {
                for term in normalize(&raw) {
                    prop_assert_eq!(term.to_lowercase(), term.clone());
                }
            }

            /// Every term clears the length floor and is never purely numeric.
            #[test]
            fn terms_clear_length_floor(raw in "\\PC{0,120}") {
                for term in normalize(&raw) {
                    prop_assert!(term.chars().count() > MIN_TOKEN_LENGTH);
                }
            }
        }
    }
}
