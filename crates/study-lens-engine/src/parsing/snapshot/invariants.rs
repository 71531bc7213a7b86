use crate::parsing::{
    blocks::Block,
    document::{Document, SectionBody},
    inline::{Span, types::markup},
};

/// Validates parser output invariants against the raw input.
///
/// Asserts that:
/// - Titles are single-line and trimmed
/// - Nested bodies hold at least two subsections and own no blocks directly
/// - Paragraphs and list items alternate plain/bold spans, starting and ending plain
/// - Titles and block markup occur in `raw` in document order
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, doc: &Document) {
    let mut cursor = Cursor { raw, pos: 0 };

    for section in &doc.sections {
        check_title(&section.title);
        cursor.advance_past(&section.title, "section title");

        if let SectionBody::Nested { subsections } = &section.body {
            assert!(
                subsections.len() >= 2,
                "nested section {:?} came from fewer than two chunks",
                section.title
            );
        }

        for block in section.own_blocks() {
            check_block(block, &mut cursor);
        }
        for sub in section.subsections() {
            check_title(&sub.title);
            cursor.advance_past(&sub.title, "subsection title");
            for block in &sub.blocks {
                check_block(block, &mut cursor);
            }
        }
    }
}

fn check_title(title: &str) {
    assert!(!title.contains('\n'), "title spans lines: {title:?}");
    assert_eq!(title, title.trim(), "title not trimmed: {title:?}");
}

fn check_block(block: &Block, cursor: &mut Cursor<'_>) {
    match block {
        Block::Paragraph { spans } => {
            check_alternation(spans);
            cursor.advance_past(&markup(spans), "paragraph");
        }
        Block::BulletList { items } => {
            assert!(!items.is_empty(), "bullet list without items");
            for item in items {
                check_alternation(item);
                cursor.advance_past(&markup(item), "bullet item");
            }
        }
    }
}

fn check_alternation(spans: &[Span]) {
    assert!(
        spans.len() % 2 == 1,
        "span sequence has even length {}: {spans:?}",
        spans.len()
    );
    for (i, span) in spans.iter().enumerate() {
        assert_eq!(
            span.is_bold(),
            i % 2 == 1,
            "span {i} out of plain/bold alternation: {spans:?}"
        );
    }
}

/// Forward-only search position into the raw text.
struct Cursor<'a> {
    raw: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn advance_past(&mut self, needle: &str, what: &str) {
        if needle.is_empty() {
            return;
        }
        match self.raw[self.pos..].find(needle) {
            Some(offset) => self.pos += offset + needle.len(),
            None => panic!(
                "{what} {needle:?} not found in source after byte {}",
                self.pos
            ),
        }
    }
}
