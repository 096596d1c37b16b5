use std::sync::LazyLock;

use regex::Regex;

use crate::scan::types::ListKind;

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\. ").unwrap());

/// List item markers with owned delimiter constants.
pub struct ListMarker;

impl ListMarker {
    /// Bullet characters accepted for unordered items.
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];

    /// Strips a list marker, returning the item kind and text.
    ///
    /// Bulleted: one bullet character followed by a space. Numbered: a
    /// digit run followed by `.` and a space.
    pub fn strip_marker(s: &str) -> Option<(ListKind, &str)> {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && Self::BULLETS.contains(&bytes[0]) && bytes[1] == b' ' {
            return Some((ListKind::Bulleted, &s[2..]));
        }
        if let Some(m) = NUMBERED.find(s) {
            return Some((ListKind::Numbered, &s[m.end()..]));
        }
        None
    }
}
