/// Horizontal rule block type with owned delimiter constant.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    /// A rule line is exactly `---` after trimming.
    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_marker_matches() {
        assert!(ThematicBreak::matches("---"));
    }

    #[test]
    fn longer_dash_runs_do_not_match() {
        assert!(!ThematicBreak::matches("----"));
        assert!(!ThematicBreak::matches("--- x"));
    }
}
