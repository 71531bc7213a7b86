/// Heading levels of the analysis grammar, with owned marker knowledge.
///
/// The grammar is two levels deep: `## ` opens a section and `### ` opens a
/// subsection. A marker only counts at the start of a line, except for the
/// very first line of the text being split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
}

impl HeadingLevel {
    /// Delimiter the text is split on: newline followed by the marker.
    pub const fn delimiter(self) -> &'static str {
        match self {
            HeadingLevel::Section => "\n## ",
            HeadingLevel::Subsection => "\n### ",
        }
    }

    /// The marker as it appears at the start of a chunk's first line.
    pub fn marker(self) -> &'static str {
        &self.delimiter()[1..]
    }

    /// Splits `text` on this level's delimiter, dropping empty chunks.
    pub fn chunks(self, text: &str) -> impl Iterator<Item = &str> {
        text.split(self.delimiter()).filter(|chunk| !chunk.is_empty())
    }

    /// Separates a chunk into its title and its body text.
    ///
    /// The first line, marker stripped if present, is the title. The remaining
    /// lines form the body. Both are trimmed.
    pub fn split_title(self, chunk: &str) -> (String, &str) {
        let (first, rest) = chunk.split_once('\n').unwrap_or((chunk, ""));
        let title = first.strip_prefix(self.marker()).unwrap_or(first);
        (title.trim().to_string(), rest.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HeadingLevel::Section, "## ")]
    #[case(HeadingLevel::Subsection, "### ")]
    fn marker_drops_newline(#[case] level: HeadingLevel, #[case] expected: &str) {
        assert_eq!(level.marker(), expected);
    }

    #[test]
    fn chunks_skip_empty() {
        let chunks: Vec<_> = HeadingLevel::Section.chunks("\n## A\n## \n## B").collect();
        assert_eq!(chunks, vec!["A", "B"]);
    }

    #[test]
    fn subsection_delimiter_does_not_split_sections() {
        let chunks: Vec<_> = HeadingLevel::Section.chunks("## A\n### a\nbody").collect();
        assert_eq!(chunks, vec!["## A\n### a\nbody"]);
    }

    #[rstest]
    #[case("## Overview\nbody", "Overview", "body")]
    #[case("Overview  \n\n  body  \n", "Overview", "body")]
    #[case("## \nbody", "", "body")]
    #[case("Title only", "Title only", "")]
    #[case("##NoSpace\nbody", "##NoSpace", "body")]
    fn split_title_cases(#[case] chunk: &str, #[case] title: &str, #[case] body: &str) {
        assert_eq!(
            HeadingLevel::Section.split_title(chunk),
            (title.to_string(), body)
        );
    }

    #[test]
    fn marker_line_with_only_spaces_gives_empty_title() {
        assert_eq!(
            HeadingLevel::Subsection.split_title("###    \nbody"),
            (String::new(), "body")
        );
    }
}
