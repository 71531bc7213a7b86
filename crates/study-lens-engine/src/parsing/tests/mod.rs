//! Behavioural tests for the parsing module, one per documented property.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, Document, SectionBody, Span, parse_blocks, parse_spans, segment, snapshot,
};

fn parse_checked(raw: &str) -> Document {
    let doc = segment(raw);
    snapshot::invariants(raw, &doc);
    doc
}

fn plain(s: &str) -> Span {
    Span::PlainText(s.to_string())
}

const ANALYSIS: &str = "## Study Overview
- Research question: does load matter?
- Design: randomized, 12 weeks

## Key Findings
Both groups grew **similar** amounts.

Strength favoured **heavy** loads.

## Practical Applications
Start here.
### Beginners
- 2-3 sets
- 8-12 reps
### Advanced
Use **periodization**.

## Bottom Line
Load matters less than effort.";

#[test]
fn full_analysis_structure() {
    let doc = parse_checked(ANALYSIS);
    let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Study Overview",
            "Key Findings",
            "Practical Applications",
            "Bottom Line"
        ]
    );

    assert!(!doc.sections[0].is_nested());
    assert!(doc.sections[0].own_blocks()[0].is_bullet_list());
    assert_eq!(doc.sections[1].own_blocks().len(), 2);

    let applications = &doc.sections[2];
    assert!(applications.is_nested());
    let sub_titles: Vec<_> = applications
        .subsections()
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(sub_titles, vec!["Start here.", "Beginners", "Advanced"]);
    assert!(applications.own_blocks().is_empty());
    assert!(applications.subsections()[0].blocks.is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\n\n")]
#[case("## ")]
#[case("##")]
#[case("\n## \n## \n")]
#[case("### only a sub marker")]
#[case("**unterminated")]
#[case("- ")]
#[case("## A\n### \n### ")]
#[case("## A\n- \n- \n\n**\n\n****")]
fn totality_on_degenerate_input(#[case] raw: &str) {
    parse_checked(raw);
}

#[test]
fn empty_and_whitespace_yield_no_sections() {
    assert!(segment("").sections.is_empty());
    assert!(segment(" \n \t ").sections.is_empty());
}

#[test]
fn empty_heading_is_kept_with_empty_title() {
    let doc = parse_checked("## First\none\n## \ntwo");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[1].title, "");
    assert_eq!(doc.sections[1].own_blocks()[0].plain_text(), "two");
}

#[test]
fn no_heading_input_is_one_section_titled_by_first_line() {
    let doc = parse_checked("Generation failed: upstream timeout\nPlease retry later.");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, "Generation failed: upstream timeout");
    assert_eq!(
        doc.sections[0].own_blocks()[0].plain_text(),
        "Please retry later."
    );
}

#[test]
fn text_before_first_heading_becomes_its_own_section() {
    let doc = parse_checked("Preface line\n## Real\nbody");
    let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Preface line", "Real"]);
    assert!(doc.sections[0].own_blocks().is_empty());
}

#[test]
fn bullet_detection() {
    // The lead line is kept as its own paragraph ahead of the list.
    assert_eq!(
        parse_blocks("Intro line\n- item one\n- item two"),
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
fn emphasis_extraction() {
    assert_eq!(
        parse_spans("A **bold** word"),
        vec![plain("A "), Span::Bold("bold".into()), plain(" word")]
    );
}

fn subsection_titles(section: &crate::parsing::Section) -> Vec<&str> {
    section
        .subsections()
        .iter()
        .map(|s| s.title.as_str())
        .collect()
}

#[test]
fn two_level_grammar() {
    let doc = parse_checked("Intro\n### Sub A\nbody A\n### Sub B\nbody B");
    assert_eq!(doc.sections.len(), 1);
    let section = &doc.sections[0];
    assert_eq!(section.title, "Intro");
    assert!(section.is_nested());
    assert_eq!(subsection_titles(section), vec!["Sub A", "Sub B"]);
    assert_eq!(section.subsections()[1].blocks[0].plain_text(), "body B");
}

#[test]
fn lead_in_text_before_sub_heading_becomes_a_subsection() {
    let doc = parse_checked("## S\nLead\n### A\nx\n### B\ny");
    let section = &doc.sections[0];
    assert_eq!(subsection_titles(section), vec!["Lead", "A", "B"]);
    assert!(section.subsections()[0].blocks.is_empty());
    assert!(section.own_blocks().is_empty());
}

#[test]
fn single_level_fallback_for_long_body() {
    let body = "Para one.\n\nPara two with **bold**.\n\n- a\n- b\n\nPara three.";
    let doc = parse_checked(&format!("## Long\n{body}"));
    assert!(matches!(doc.sections[0].body, SectionBody::Flat { .. }));
    assert_eq!(doc.sections[0].own_blocks().len(), 4);
}

#[test]
fn flat_and_nested_are_exclusive() {
    let doc = parse_checked(ANALYSIS);
    for section in &doc.sections {
        match &section.body {
            SectionBody::Flat { .. } => assert!(section.subsections().is_empty()),
            SectionBody::Nested { subsections } => assert!(subsections.len() >= 2),
        }
    }
}

#[test]
fn paragraph_content_round_trips() {
    let body = "First paragraph\nwraps a line.\n\nSecond one.";
    let rebuilt: Vec<String> = parse_blocks(body).iter().map(Block::plain_text).collect();
    assert_eq!(rebuilt.join("\n\n"), body);
}

#[test]
fn span_text_concatenates_to_unmarked_content() {
    let spans = parse_spans("Effect **d = 0.4** was **small** overall");
    let text: String = spans.iter().map(Span::text).collect();
    assert_eq!(text, "Effect d = 0.4 was small overall");
}

#[test]
fn order_is_preserved_across_levels() {
    let raw = "## B\n### z\n1\n### a\n2\n## A\nlast";
    let doc = parse_checked(raw);
    assert_eq!(doc.sections[0].title, "B");
    assert_eq!(doc.sections[0].subsections()[0].title, "z");
    assert_eq!(doc.sections[0].subsections()[1].title, "a");
    assert_eq!(doc.sections[1].title, "A");
    let texts: Vec<String> = doc.blocks().map(Block::plain_text).collect();
    assert_eq!(texts, vec!["1", "2", "last"]);
}

#[test]
fn empty_plain_spans_are_not_pruned() {
    let blocks = parse_blocks("**Bottom line:** train hard");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            spans: vec![
                plain(""),
                Span::Bold("Bottom line:".into()),
                plain(" train hard")
            ]
        }]
    );
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(segment(ANALYSIS), segment(ANALYSIS));
}

#[test]
fn concurrent_parses_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| segment(ANALYSIS)))
        .collect();
    let expected = segment(ANALYSIS);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
