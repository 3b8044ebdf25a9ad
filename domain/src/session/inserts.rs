//! Keyword-triggered text inserts.
//!
//! A session can be configured with `(keyword, insert)` pairs. When a message
//! being appended contains a keyword, the insert text is attached after a
//! blank line before the message is stored.

/// Ordered keyword → insert-text substitutions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInserts {
    entries: Vec<(String, String)>,
}

impl KeywordInserts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an insert; entries are applied in registration order
    pub fn with(mut self, keyword: impl Into<String>, insert: impl Into<String>) -> Self {
        self.entries.push((keyword.into(), insert.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach every insert whose keyword occurs in `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (keyword, insert) in &self.entries {
            if text.contains(keyword.as_str()) {
                out.push_str("\n\n");
                out.push_str(insert);
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeywordInserts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_keyword_appends_insert() {
        let inserts = KeywordInserts::new().with("recipe", "Use metric units.");
        assert_eq!(
            inserts.apply("Give me a recipe for bread"),
            "Give me a recipe for bread\n\nUse metric units."
        );
    }

    #[test]
    fn test_no_match_leaves_text_unchanged() {
        let inserts = KeywordInserts::new().with("recipe", "Use metric units.");
        assert_eq!(inserts.apply("Hello there"), "Hello there");
    }

    #[test]
    fn test_multiple_matches_apply_in_order() {
        let inserts: KeywordInserts = [("a", "first"), ("b", "second")].into_iter().collect();
        assert_eq!(inserts.apply("a b"), "a b\n\nfirst\n\nsecond");
    }

    #[test]
    fn test_keyword_is_case_sensitive_substring() {
        let inserts = KeywordInserts::new().with("Rust", "Be idiomatic.");
        assert_eq!(inserts.apply("I like rust"), "I like rust");
        assert_eq!(inserts.apply("Trusty"), "Trusty");
    }
}
