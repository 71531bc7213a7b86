/// Paragraph block type with owned separator constant.
pub struct Paragraph;

impl Paragraph {
    /// Blank-line boundary between two blocks.
    pub const SEPARATOR: &'static str = "\n\n";

    /// Splits a leaf body into block chunks, dropping chunks with no content.
    pub fn chunks(text: &str) -> impl Iterator<Item = &str> {
        text.split(Self::SEPARATOR)
            .filter(|chunk| !chunk.trim().is_empty())
    }
}
