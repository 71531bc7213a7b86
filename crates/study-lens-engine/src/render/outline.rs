use crate::{
    analysis::Analysis,
    parsing::{Block, Span},
    records::{ClaimValidation, Study},
};

/// Renders an analysis as an indented plain-text outline.
///
/// Section titles are prefixed with `==`, subsection titles with `--`, bold
/// spans are wrapped in `*`.
pub fn to_outline(analysis: &Analysis) -> String {
    let mut lines = Vec::new();

    for section in &analysis.document.sections {
        lines.push(format!("== {}", section.title));
        push_blocks(&mut lines, section.own_blocks(), "   ");
        for sub in section.subsections() {
            lines.push(format!("   -- {}", sub.title));
            push_blocks(&mut lines, &sub.blocks, "      ");
        }
        lines.push(String::new());
    }

    if let Some(model) = &analysis.model_used {
        lines.push(format!("(generated by {model})"));
    }

    lines.join("\n")
}

fn push_blocks(lines: &mut Vec<String>, blocks: &[Block], indent: &str) {
    for block in blocks {
        match block {
            Block::Paragraph { spans } => {
                for line in styled(spans).lines() {
                    lines.push(format!("{indent}{line}"));
                }
            }
            Block::BulletList { items } => {
                for item in items {
                    lines.push(format!("{indent}• {}", styled(item)));
                }
            }
        }
    }
}

fn styled(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::PlainText(text) => text.clone(),
            Span::Bold(text) => format!("*{text}*"),
        })
        .collect()
}

/// Header lines naming the study an analysis belongs to.
///
/// Missing bibliographic fields are left out rather than shown empty.
pub fn study_lines(study: &Study) -> Vec<String> {
    let mut lines = vec![study.title.clone()];
    if let Some(authors) = &study.authors {
        lines.push(authors.clone());
    }

    let source: Vec<String> = [
        study.journal.clone(),
        study.publication_year.map(|year| year.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !source.is_empty() {
        lines.push(source.join(", "));
    }

    if let Some(doi) = &study.doi {
        lines.push(format!("doi:{doi}"));
    }
    lines
}

/// Lays out a claim-validation record for display, fields verbatim.
pub fn verdict_lines(claim: &ClaimValidation) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Verdict: {} ({} confidence)",
            claim.verdict.label(),
            claim.confidence
        ),
        format!("Summary: {}", claim.summary),
        format!(
            "Evidence: {} supporting, {} mixed, {} refuting",
            claim.evidence.supporting, claim.evidence.mixed, claim.evidence.refuting
        ),
    ];

    if !claim.key_studies.is_empty() {
        lines.push("Key studies:".to_string());
        for study in &claim.key_studies {
            lines.push(format!("  [{}] {}: {}", study.id, study.title, study.finding));
        }
    }

    lines.push(format!("Bottom line: {}", claim.bottom_line));
    lines
}
