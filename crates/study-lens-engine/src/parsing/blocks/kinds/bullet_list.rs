/// Bullet list block type with owned marker constants.
pub struct BulletList;

/// A bullet chunk split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletParts<'a> {
    /// Text before the first marker line, when the chunk does not open with one.
    pub lead: Option<&'a str>,
    /// Item texts with the marker removed, in source order.
    pub items: Vec<&'a str>,
}

impl BulletList {
    /// Marker opening an item at the start of a chunk.
    pub const MARKER: &'static str = "- ";

    /// Marker opening an item at the start of any later line.
    pub const LINE_MARKER: &'static str = "\n- ";

    /// Returns true if the chunk holds at least one line-start bullet marker.
    pub fn detect(chunk: &str) -> bool {
        chunk.starts_with(Self::MARKER) || chunk.contains(Self::LINE_MARKER)
    }

    /// Splits a bullet chunk on its line markers.
    ///
    /// Items are stripped of a leading `- ` remnant and empty items are dropped.
    /// Whitespace-only lead text is dropped as well.
    pub fn split(chunk: &str) -> BulletParts<'_> {
        let mut parts = chunk.split(Self::LINE_MARKER);
        let first = parts.next().unwrap_or_default();

        let mut items = vec![];
        let lead = match first.strip_prefix(Self::MARKER) {
            Some(item) => {
                items.push(item);
                None
            }
            None if first.trim().is_empty() => None,
            None => Some(first),
        };

        items.extend(parts.map(|item| item.strip_prefix(Self::MARKER).unwrap_or(item)));
        items.retain(|item| !item.is_empty());

        BulletParts { lead, items }
    }
}
