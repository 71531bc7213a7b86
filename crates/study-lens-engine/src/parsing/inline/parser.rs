use super::{kinds::Emphasis, types::Span};

/// Parses inline content into a sequence of [`Span`]s.
///
/// This is a capturing split on the emphasis pattern: the text between matches
/// and the matches themselves alternate in the output, starting and ending with
/// a plain group. Groups produced next to a match at either end of `text`, or
/// between two adjacent matches, are empty [`Span::PlainText`] and are kept.
///
/// An unmatched trailing `**` stays inside its plain group, markers included.
/// The output is never empty; `""` parses to a single empty plain span.
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut out = vec![];
    let mut plain_start = 0;

    for m in Emphasis::pattern().find_iter(text) {
        out.push(Span::PlainText(text[plain_start..m.start()].to_string()));
        out.push(match Emphasis::strip(m.as_str()) {
            Some(inner) => Span::Bold(inner.to_string()),
            None => Span::PlainText(m.as_str().to_string()),
        });
        plain_start = m.end();
    }

    out.push(Span::PlainText(text[plain_start..].to_string()));
    out
}
