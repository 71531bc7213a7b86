use serde::{Deserialize, Serialize};

use crate::parsing::inline::{Span, types::plain_text};

/// A block-level element of a leaf body.
///
/// The kind is decided once during parsing; renderers never re-derive it from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A blank-line-delimited chunk of running text.
    Paragraph {
        /// Inline spans covering the whole chunk.
        spans: Vec<Span>,
    },
    /// A run of `- ` items.
    BulletList {
        /// One span sequence per item, in source order.
        items: Vec<Vec<Span>>,
    },
}

impl Block {
    /// Text content without markup. List items are joined with newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph { spans } => plain_text(spans),
            Block::BulletList { items } => items
                .iter()
                .map(|item| plain_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    #[must_use]
    pub fn is_bullet_list(&self) -> bool {
        matches!(self, Block::BulletList { .. })
    }
}
