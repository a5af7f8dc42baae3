//! Analysis result types returned by the backend.

use serde::{Deserialize, Serialize};

/// Shown wherever the backend did not supply an author name.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A ranked (term, frequency) pair.
///
/// Accepts both `{"term": "model", "count": 12}` and `["model", 12]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TermCountRepr")]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: u64) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }

    /// `"<term> (<count>)"`, the format used by every list and the card.
    pub fn label(&self) -> String {
        format!("{} ({})", self.term, self.count)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TermCountRepr {
    Object { term: String, count: u64 },
    Pair(String, u64),
}

impl From<TermCountRepr> for TermCount {
    fn from(repr: TermCountRepr) -> Self {
        match repr {
            TermCountRepr::Object { term, count } | TermCountRepr::Pair(term, count) => {
                TermCount { term, count }
            }
        }
    }
}

/// Everything the backend reports for one researcher.
///
/// List order is the backend's rank order and is never re-sorted. The three
/// lists are required; `most_common_*` is the older backend's naming, where
/// nouns stand in for topics. That backend never reports `works_used`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub works_used: u64,
    #[serde(alias = "most_common_words")]
    pub top_words: Vec<TermCount>,
    #[serde(alias = "most_common_verbs")]
    pub top_verbs: Vec<TermCount>,
    #[serde(alias = "most_common_nouns")]
    pub topics: Vec<TermCount>,
    // Optional corpus statistics some backends include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_words: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_words: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity_score: Option<f64>,
}

impl AnalysisResult {
    /// Author name, or "Unknown Author" when absent or blank.
    pub fn display_name(&self) -> &str {
        self.author_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// `"Based on {works_used} recent abstracts"`
    pub fn caption(&self) -> String {
        format!("Based on {} recent abstracts", self.works_used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_and_pair_term_counts() {
        let json = r#"{
            "author_name": "A. Example",
            "works_used": 10,
            "top_words": [{"term": "model", "count": 12}, ["data", 9]],
            "top_verbs": [],
            "topics": [["learning", 3]]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("valid result");
        assert_eq!(result.display_name(), "A. Example");
        assert_eq!(result.works_used, 10);
        assert_eq!(
            result.top_words,
            vec![TermCount::new("model", 12), TermCount::new("data", 9)]
        );
        assert_eq!(result.topics[0].label(), "learning (3)");
    }

    #[test]
    fn test_missing_author_and_works_default() {
        let json = r#"{"top_words": [], "top_verbs": [], "topics": []}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("lists only");
        assert_eq!(result.display_name(), UNKNOWN_AUTHOR);
        assert_eq!(result.caption(), "Based on 0 recent abstracts");
        assert!(result.top_words.is_empty());
    }

    #[test]
    fn test_missing_lists_are_rejected() {
        assert!(serde_json::from_str::<AnalysisResult>("{}").is_err());
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"foo": 1}"#).is_err());
        assert!(serde_json::from_str::<AnalysisResult>(
            r#"{"author_name": "X", "top_words": [], "top_verbs": []}"#
        )
        .is_err());
    }

    #[test]
    fn test_parse_most_common_naming() {
        let json = r#"{
            "total_words": 1520,
            "unique_words": 610,
            "diversity_score": 40.13,
            "most_common_words": [["model", 31], ["data", 22]],
            "most_common_verbs": [["using", 9]],
            "most_common_nouns": [["network", 14]],
            "author_name": "A. Example"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("most_common body");
        assert_eq!(result.display_name(), "A. Example");
        assert_eq!(result.top_words[0], TermCount::new("model", 31));
        assert_eq!(result.top_verbs[0].label(), "using (9)");
        assert_eq!(result.topics[0].label(), "network (14)");
        assert_eq!(result.works_used, 0);
        assert_eq!(result.unique_words, Some(610));
    }

    #[test]
    fn test_blank_author_falls_back() {
        let result = AnalysisResult {
            author_name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(result.display_name(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<AnalysisResult>(
            r#"{"top_words": "model", "top_verbs": [], "topics": []}"#
        )
        .is_err());
        assert!(serde_json::from_str::<AnalysisResult>(
            r#"{"works_used": -1, "top_words": [], "top_verbs": [], "topics": []}"#
        )
        .is_err());
    }
}
