use crate::parsing::{
    blocks::parse_blocks,
    document::{Document, Section, SectionBody, Subsection},
};

use super::heading::HeadingLevel;

/// Splits raw analysis text into a [`Document`].
///
/// Total over all strings. Empty or whitespace-only input yields an empty
/// document. Text with no `## ` marker yields a single section whose title is
/// its first line.
pub fn segment(raw: &str) -> Document {
    if raw.trim().is_empty() {
        return Document::default();
    }

    Document {
        sections: HeadingLevel::Section.chunks(raw).map(section).collect(),
    }
}

fn section(chunk: &str) -> Section {
    let (title, body) = HeadingLevel::Section.split_title(chunk);
    Section {
        title,
        body: section_body(body),
    }
}

/// Decides between a flat and a nested body.
///
/// Two or more `### ` chunks make the body nested, and every chunk becomes a
/// subsection. Lead-in text before the first `### ` is titled by its first line.
fn section_body(body: &str) -> SectionBody {
    let level = HeadingLevel::Subsection;
    let chunks: Vec<&str> = level.chunks(body).collect();
    if chunks.len() < 2 {
        return SectionBody::Flat {
            blocks: parse_blocks(body),
        };
    }

    let subsections = chunks
        .into_iter()
        .map(|chunk| {
            let (title, text) = level.split_title(chunk);
            Subsection {
                title,
                blocks: parse_blocks(text),
            }
        })
        .collect();

    SectionBody::Nested { subsections }
}
