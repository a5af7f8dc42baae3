//! Social share link construction.

use crate::model::AnalysisResult;

/// Share-intent endpoint the generated link points at.
pub const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Top words quoted in the share text.
const SHARED_WORDS: usize = 3;

/// Text posted by the share link.
pub fn share_text(data: &AnalysisResult) -> String {
    let words: Vec<&str> = data
        .top_words
        .iter()
        .take(SHARED_WORDS)
        .map(|t| t.term.as_str())
        .collect();
    format!(
        "My Research Wrapped — {} — Top words: {}",
        data.display_name(),
        words.join(", ")
    )
}

/// Share-intent URL with the percent-encoded share text.
pub fn build_share_link(data: &AnalysisResult) -> String {
    format!(
        "{}?text={}",
        SHARE_INTENT_URL,
        urlencoding::encode(&share_text(data))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TermCount;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            author_name: Some("Ada Lovelace & Co".into()),
            works_used: 8,
            top_words: vec![
                TermCount::new("engine", 9),
                TermCount::new("analytical", 7),
                TermCount::new("numbers", 5),
                TermCount::new("loom", 2),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_share_text() {
        assert_eq!(
            share_text(&sample()),
            "My Research Wrapped — Ada Lovelace & Co — Top words: engine, analytical, numbers"
        );
    }

    #[test]
    fn test_link_decodes_to_author_and_words_in_order() {
        let link = build_share_link(&sample());
        assert!(link.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains("& "));

        let decoded = urlencoding::decode(&link).expect("utf-8");
        let author = decoded.find("Ada Lovelace & Co").expect("author");
        let first = decoded.find("engine").expect("first word");
        let second = decoded.find("analytical").expect("second word");
        let third = decoded.find("numbers").expect("third word");
        assert!(author < first && first < second && second < third);
        assert!(!decoded.contains("loom"));
    }

    #[test]
    fn test_fewer_than_three_words() {
        let data = AnalysisResult {
            top_words: vec![TermCount::new("model", 12)],
            ..Default::default()
        };
        assert_eq!(
            share_text(&data),
            "My Research Wrapped — Unknown Author — Top words: model"
        );
    }
}
