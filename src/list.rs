//! Ranked list rendering.

use crate::model::TermCount;

/// A display element that holds a flat list of text entries.
pub trait ListTarget {
    /// Remove every existing entry.
    fn clear(&mut self);
    /// Append one entry at the end.
    fn append(&mut self, entry: String);
}

/// Replace the contents of `target` with one `"<term> (<count>)"` entry per item.
///
/// Input order is kept; an empty slice leaves the target empty.
pub fn render<T: ListTarget + ?Sized>(target: &mut T, items: &[TermCount]) {
    target.clear();
    for item in items {
        target.append(item.label());
    }
}

/// In-memory list element, the stand-in for a `<ul>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    entries: Vec<String>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as an HTML `<ul>` with escaped entries.
    pub fn to_html(&self, id: &str) -> String {
        let mut html = format!("<ul id=\"{}\">", escape_html(id));
        for entry in &self.entries {
            html.push_str("<li>");
            html.push_str(&escape_html(entry));
            html.push_str("</li>");
        }
        html.push_str("</ul>");
        html
    }
}

impl ListTarget for ListView {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: String) {
        self.entries.push(entry);
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn items() -> Vec<TermCount> {
        vec![
            TermCount::new("model", 12),
            TermCount::new("data", 9),
            TermCount::new("network", 4),
        ]
    }

    #[test]
    fn test_render_in_input_order() {
        let mut view = ListView::new();
        render(&mut view, &items());
        assert_eq!(view.entries(), ["model (12)", "data (9)", "network (4)"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut view = ListView::new();
        render(&mut view, &items());
        render(&mut view, &items());
        assert_eq!(view.entries().len(), 3);
        assert_eq!(view.entries()[0], "model (12)");
    }

    #[test]
    fn test_render_replaces_previous_entries() {
        let mut view = ListView::new();
        render(&mut view, &items());
        render(&mut view, &[]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_html_output_escapes_terms() {
        let mut view = ListView::new();
        render(
            &mut view,
            &[TermCount::new("<b>&", 2), TermCount::new("plain", 1)],
        );
        let html = view.to_html("words");
        assert!(html.contains("&lt;b&gt;&amp; (2)"));

        let doc = Html::parse_fragment(&html);
        let selector = Selector::parse("ul#words > li").expect("selector");
        let texts: Vec<String> = doc
            .select(&selector)
            .map(|li| li.text().collect::<String>())
            .collect();
        assert_eq!(texts, vec!["<b>& (2)", "plain (1)"]);
    }
}
