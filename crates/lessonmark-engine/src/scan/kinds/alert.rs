use crate::scan::types::AlertKind;

/// Alert box markers with owned glyph constants.
///
/// An alert line is a glyph, optional whitespace, then a `**` run opening
/// the alert title. The glyph and the first `**...**` delimiter pair are
/// consumed; the text between and after them is the alert body.
pub struct AlertMarker;

impl AlertMarker {
    pub const WARNING_GLYPH: &'static str = "⚠️";
    pub const INFO_GLYPH: &'static str = "💡";
    pub const BOLD: &'static str = "**";

    /// Strips the alert glyph and the leading `**...**` pair.
    ///
    /// `None` when the line is not an alert (no glyph, or the glyph is not
    /// followed by `**`). A missing closing `**` leaves the rest of the
    /// line untouched.
    pub fn strip_marker(s: &str) -> Option<(AlertKind, String)> {
        let (kind, rest) = if let Some(rest) = s.strip_prefix(Self::WARNING_GLYPH) {
            (AlertKind::Warning, rest)
        } else if let Some(rest) = s.strip_prefix(Self::INFO_GLYPH) {
            (AlertKind::Info, rest)
        } else {
            return None;
        };

        let rest = rest.trim_start().strip_prefix(Self::BOLD)?;
        let text = match rest.find(Self::BOLD) {
            Some(at) => format!("{}{}", &rest[..at], &rest[at + Self::BOLD.len()..]),
            None => rest.to_string(),
        };
        Some((kind, text.trim().to_string()))
    }
}
