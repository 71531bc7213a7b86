use crate::{
    analysis::Analysis,
    parsing::{Block, Section, Span},
};

/// Options for [`to_html`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Render the first section expanded.
    pub open_first_section: bool,
    /// Append a "Generated by" line when the analysis carries a model label.
    pub show_model: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            open_first_section: true,
            show_model: true,
        }
    }
}

/// Renders an analysis as collapsible HTML: one `<details>` per section.
pub fn to_html(analysis: &Analysis, options: &HtmlOptions) -> String {
    let mut out = String::from("<div class=\"analysis\">\n");

    for (i, section) in analysis.document.sections.iter().enumerate() {
        let open = options.open_first_section && i == 0;
        push_section(&mut out, section, open);
    }

    if options.show_model
        && let Some(model) = &analysis.model_used
    {
        out.push_str("<p class=\"attribution\">Generated by ");
        out.push_str(&html_escape::encode_text(model));
        out.push_str("</p>\n");
    }

    out.push_str("</div>\n");
    out
}

fn push_section(out: &mut String, section: &Section, open: bool) {
    out.push_str(if open { "<details open>\n" } else { "<details>\n" });
    out.push_str("<summary>");
    out.push_str(&html_escape::encode_text(&section.title));
    out.push_str("</summary>\n");

    push_blocks(out, section.own_blocks());
    for sub in section.subsections() {
        out.push_str("<section>\n<h4>");
        out.push_str(&html_escape::encode_text(&sub.title));
        out.push_str("</h4>\n");
        push_blocks(out, &sub.blocks);
        out.push_str("</section>\n");
    }

    out.push_str("</details>\n");
}

fn push_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph { spans } => {
                out.push_str("<p>");
                push_spans(out, spans);
                out.push_str("</p>\n");
            }
            Block::BulletList { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    out.push_str("<li>");
                    push_spans(out, item);
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n");
            }
        }
    }
}

fn push_spans(out: &mut String, spans: &[Span]) {
    for span in spans.iter().filter(|span| !span.is_empty()) {
        match span {
            Span::PlainText(text) => out.push_str(&html_escape::encode_text(text)),
            Span::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&html_escape::encode_text(text));
                out.push_str("</strong>");
            }
        }
    }
}
