//! Researcher identifier classification.
//!
//! Turns whatever the user typed into the query parameter the analysis backend
//! expects: `orcid=<id>` or `author=<id>`.

use regex::Regex;
use std::sync::LazyLock;

static ORCID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dXx]$").expect("ORCID pattern is valid")
});

static OPENALEX_AUTHOR_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)openalex\.org/(?:authors/)?A\d+").expect("OpenAlex URL pattern is valid")
});

static AUTHOR_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^A\d+$").expect("author ID pattern is valid"));

/// Query parameter sent to the backend's `/analyze` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryParams {
    /// Nothing usable was entered
    #[default]
    Empty,
    /// `orcid=<id>`
    Orcid(String),
    /// `author=<id>` (OpenAlex author ID or URL)
    Author(String),
}

impl QueryParams {
    /// True when no identifier was entered.
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryParams::Empty)
    }

    /// Key/value pairs for the query string; empty when nothing was entered.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            QueryParams::Empty => Vec::new(),
            QueryParams::Orcid(id) => vec![("orcid", id.as_str())],
            QueryParams::Author(id) => vec![("author", id.as_str())],
        }
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryParams::Empty => write!(f, "(empty)"),
            QueryParams::Orcid(id) => write!(f, "orcid={}", id),
            QueryParams::Author(id) => write!(f, "author={}", id),
        }
    }
}

/// Classify a raw identifier string.
///
/// Inputs that look like neither an ORCID nor an OpenAlex author fall back to
/// `orcid`, leaving the backend to reject them.
pub fn parse_identifier(raw: &str) -> QueryParams {
    let input = raw.trim();
    if input.is_empty() {
        return QueryParams::Empty;
    }

    if is_orcid(input) {
        return QueryParams::Orcid(input.to_string());
    }

    if OPENALEX_AUTHOR_URL_RE.is_match(input) || AUTHOR_ID_RE.is_match(input) {
        return QueryParams::Author(input.to_string());
    }

    QueryParams::Orcid(input.to_string())
}

/// Bare ORCID, or an ORCID URL whose last path segment is one.
fn is_orcid(input: &str) -> bool {
    let last_segment = input.trim_end_matches('/').rsplit('/').next().unwrap_or(input);
    ORCID_RE.is_match(last_segment)
}
