use crate::parsing::inline::parse_spans;

use super::{
    kinds::{BulletList, Paragraph},
    types::Block,
};

/// Parses a leaf body into [`Block`]s.
///
/// Each blank-line-delimited chunk becomes one block, except a bullet chunk with
/// lead-in text, which becomes a paragraph for the lead followed by the list.
/// A bullet chunk whose markers carry no item text stays a paragraph.
/// Chunks with no content are skipped, so `""` yields no blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut out = vec![];

    for chunk in Paragraph::chunks(text) {
        if !BulletList::detect(chunk) {
            out.push(paragraph(chunk));
            continue;
        }

        let parts = BulletList::split(chunk);
        if parts.items.is_empty() {
            out.push(paragraph(chunk));
            continue;
        }
        if let Some(lead) = parts.lead {
            out.push(paragraph(lead));
        }
        out.push(Block::BulletList {
            items: parts.items.into_iter().map(parse_spans).collect(),
        });
    }

    out
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        spans: parse_spans(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::Span;
    use pretty_assertions::assert_eq;

    fn plain(s: &str) -> Span {
        Span::PlainText(s.to_string())
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(
            parse_blocks("Just text."),
            vec![Block::Paragraph {
                spans: vec![plain("Just text.")]
            }]
        );
    }

    #[test]
    fn bullet_chunk_with_intro_line() {
        let blocks = parse_blocks("Intro line\n- item one\n- item two");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph {
                    spans: vec![plain("Intro line")]
                },
                Block::BulletList {
                    items: vec![vec![plain("item one")], vec![plain("item two")]]
                },
            ]
        );
    }

    #[test]
    fn bullet_items_carry_spans() {
        let blocks = parse_blocks("- **Sample**: 24 adults");
        assert_eq!(
            blocks,
            vec![Block::BulletList {
                items: vec![vec![
                    plain(""),
                    Span::Bold("Sample".into()),
                    plain(": 24 adults")
                ]]
            }]
        );
    }

    #[test]
    fn paragraphs_and_lists_keep_order() {
        let blocks = parse_blocks("First.\n\n- a\n- b\n\nLast.");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
        assert!(blocks[1].is_bullet_list());
        assert_eq!(blocks[2].plain_text(), "Last.");
    }

    #[test]
    fn marker_without_items_stays_paragraph() {
        assert_eq!(
            parse_blocks("Intro\n- "),
            vec![Block::Paragraph {
                spans: vec![plain("Intro\n- ")]
            }]
        );
    }

    #[test]
    fn empty_text_has_no_blocks() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("\n\n\n\n").is_empty());
    }

    #[test]
    fn bullet_plain_text_joins_items() {
        let blocks = parse_blocks("- a\n- b");
        assert_eq!(blocks[0].plain_text(), "a\nb");
    }
}
