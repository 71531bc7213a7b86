use serde::{Deserialize, Serialize};

use super::kinds::Emphasis;

/// A styled run of inline text.
///
/// Spans own their text. Concatenating [`Span::text`] across a sequence gives the
/// source content with matched emphasis delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Text outside any emphasis pair. May be empty.
    PlainText(String),
    /// Text that was wrapped in `**`, delimiters stripped.
    Bold(String),
}

impl Span {
    /// The span's text without any markup.
    pub fn text(&self) -> &str {
        match self {
            Span::PlainText(text) | Span::Bold(text) => text,
        }
    }

    /// True for spans with no text. Renderers treat these as no-ops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        matches!(self, Span::Bold(_))
    }

    /// The span written back in source markup.
    pub fn to_markup(&self) -> String {
        match self {
            Span::PlainText(text) => text.clone(),
            Span::Bold(text) => format!("{0}{text}{0}", Emphasis::DELIM),
        }
    }
}

/// Joins the text of `spans` without markup.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Joins `spans` back into source markup.
pub fn markup(spans: &[Span]) -> String {
    spans.iter().map(Span::to_markup).collect()
}
