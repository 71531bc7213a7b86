use std::sync::OnceLock;

use regex::Regex;

/// Emphasis span type with owned delimiter knowledge.
///
/// The grammar only knows one emphasis form, a `**...**` pair on a single line.
pub struct Emphasis;

impl Emphasis {
    /// The two-character marker wrapping bold text.
    pub const DELIM: &'static str = "**";

    /// Pattern matching one delimited group, shortest match first.
    ///
    /// `.` does not cross newlines, so a pair split over two lines never matches.
    pub fn pattern() -> &'static Regex {
        static EMPHASIS_REGEX: OnceLock<Regex> = OnceLock::new();
        EMPHASIS_REGEX.get_or_init(|| Regex::new(r"\*\*.*?\*\*").expect("Invalid emphasis regex"))
    }

    /// Strips the delimiters from both ends of a matched group.
    ///
    /// Returns `None` when `group` is not wrapped on both sides, including the
    /// bare `**` case where the two ends would overlap.
    pub fn strip(group: &str) -> Option<&str> {
        group
            .strip_prefix(Self::DELIM)?
            .strip_suffix(Self::DELIM)
    }
}
