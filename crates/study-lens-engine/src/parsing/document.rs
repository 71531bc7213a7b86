use serde::{Deserialize, Serialize};

use super::blocks::Block;

/// One parsed analysis: its top-level sections in source order.
///
/// The tree owns everything below it and is never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over every block in document order, descending into subsections.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.blocks())
    }
}

/// A top-level section introduced by a `## ` heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text, trimmed. Empty when the heading line was empty.
    pub title: String,
    pub body: SectionBody,
}

/// The content of a section: either blocks directly, or subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    /// The body had fewer than two `### ` chunks and is parsed as one leaf.
    Flat { blocks: Vec<Block> },
    /// The body split into two or more `### ` chunks, one subsection each.
    ///
    /// Text before the first `### ` heading is a chunk like any other: its first
    /// line becomes a subsection title.
    Nested { subsections: Vec<Subsection> },
}

/// A second-level section introduced by a `### ` heading. Never nests further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub fn is_nested(&self) -> bool {
        matches!(self.body, SectionBody::Nested { .. })
    }

    /// Subsections of a nested section; empty for a flat one.
    pub fn subsections(&self) -> &[Subsection] {
        match &self.body {
            SectionBody::Flat { .. } => &[],
            SectionBody::Nested { subsections } => subsections,
        }
    }

    /// Blocks of a flat section; empty for a nested one.
    pub fn own_blocks(&self) -> &[Block] {
        match &self.body {
            SectionBody::Flat { blocks } => blocks,
            SectionBody::Nested { .. } => &[],
        }
    }

    /// Every block in the section in source order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.own_blocks()
            .iter()
            .chain(self.subsections().iter().flat_map(|sub| sub.blocks.iter()))
    }
}
