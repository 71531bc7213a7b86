use serde::Serialize;

use crate::parsing::{
    blocks::Block,
    document::{Document, SectionBody},
    inline::Span,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub sections: Vec<SectionSnap>,
}

#[derive(Debug, Serialize)]
pub struct SectionSnap {
    pub title: String,
    pub kind: String,
    pub blocks: Vec<String>,
    pub subsections: Vec<SubsectionSnap>,
}

#[derive(Debug, Serialize)]
pub struct SubsectionSnap {
    pub title: String,
    pub blocks: Vec<String>,
}

/// Flattens a document into one line per block.
///
/// Spans are joined with `|` so empty plain spans stay visible; bold spans are
/// wrapped in `*`. List items are joined with ` / `.
pub fn normalize(doc: &Document) -> Snap {
    let sections = doc
        .sections
        .iter()
        .map(|section| {
            let kind = match &section.body {
                SectionBody::Flat { .. } => "Flat",
                SectionBody::Nested { .. } => "Nested",
            };
            SectionSnap {
                title: section.title.clone(),
                kind: kind.to_string(),
                blocks: section.own_blocks().iter().map(block_line).collect(),
                subsections: section
                    .subsections()
                    .iter()
                    .map(|sub| SubsectionSnap {
                        title: sub.title.clone(),
                        blocks: sub.blocks.iter().map(block_line).collect(),
                    })
                    .collect(),
            }
        })
        .collect();

    Snap { sections }
}

fn block_line(block: &Block) -> String {
    match block {
        Block::Paragraph { spans } => format!("paragraph: {}", spans_line(spans)),
        Block::BulletList { items } => {
            let items: Vec<String> = items.iter().map(|item| spans_line(item)).collect();
            format!("bullets: {}", items.join(" / "))
        }
    }
}

fn spans_line(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::PlainText(text) => text.clone(),
            Span::Bold(text) => format!("*{text}*"),
        })
        .collect::<Vec<_>>()
        .join("|")
}
