use crate::scan::types::{AlertKind, ListKind};

use super::kinds::{AlertMarker, BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block scanning: each line is classified independently
/// without reference to surrounding context. The builder decides how lines
/// combine (a fence line toggles code mode, list items aggregate, etc.).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line exactly as it appeared in the source (no trailing newline).
    /// Code blocks capture this verbatim.
    pub raw: String,
    /// What the line looks like outside of a code fence.
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only line.
    Blank,
    /// Fence line; `lang` is the resolved language tag of an opening fence.
    Fence { lang: String },
    /// Heading line with the raw (unclamped) `#` count.
    Heading { level: u8, text: String },
    /// `---` divider.
    Rule,
    /// Single `>`-prefixed quote line.
    Quote { text: String },
    /// One list item of either marker kind.
    ListItem { kind: ListKind, text: String },
    /// Glyph-marked alert line.
    Alert { kind: AlertKind, text: String },
    /// Anything else: a paragraph line, trimmed.
    Text { text: String },
}

/// Classifies individual lines for the block scanning phase.
pub struct LessonLineClassifier;

impl LessonLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Kind checks run on the trimmed line, in fixed order: fence, heading,
    /// rule, alert, quote, list item, paragraph.
    pub fn classify(&self, line: &str) -> LineClass {
        let raw = line.trim_end_matches('\r');
        let trimmed = raw.trim();

        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if let Some(tag) = CodeFence::sig(trimmed) {
            LineKind::Fence {
                lang: CodeFence::language(tag),
            }
        } else if let Some((level, text)) = Heading::strip_marker(trimmed) {
            LineKind::Heading {
                level,
                text: text.to_string(),
            }
        } else if ThematicBreak::matches(trimmed) {
            LineKind::Rule
        } else if let Some((kind, text)) = AlertMarker::strip_marker(trimmed) {
            LineKind::Alert { kind, text }
        } else if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            LineKind::Quote {
                text: text.to_string(),
            }
        } else if let Some((kind, text)) = ListMarker::strip_marker(trimmed) {
            LineKind::ListItem {
                kind,
                text: text.to_string(),
            }
        } else {
            LineKind::Text {
                text: trimmed.to_string(),
            }
        };

        LineClass {
            raw: raw.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn classify(line: &str) -> LineKind {
        LessonLineClassifier.classify(line).kind
    }

    #[test]
    fn blank_line() {
        assert_eq!(classify("   "), LineKind::Blank);
    }

    #[test]
    fn fence_line_resolves_language() {
        assert_eq!(
            classify("```python"),
            LineKind::Fence {
                lang: "python".to_string()
            }
        );
        assert_eq!(
            classify("```"),
            LineKind::Fence {
                lang: "text".to_string()
            }
        );
    }

    #[rstest]
    #[case("# One", 1)]
    #[case("## Two", 2)]
    #[case("### Three", 3)]
    #[case("##### Five", 5)]
    fn heading_levels(#[case] line: &str, #[case] level: u8) {
        let LineKind::Heading { level: got, .. } = classify(line) else {
            panic!("expected heading for {line:?}");
        };
        assert_eq!(got, level);
    }

    #[test]
    fn alert_wins_over_paragraph() {
        assert_eq!(
            classify("⚠️ **Watch out**"),
            LineKind::Alert {
                kind: AlertKind::Warning,
                text: "Watch out".to_string()
            }
        );
    }

    #[test]
    fn carriage_return_is_stripped() {
        assert_eq!(
            classify("plain\r"),
            LineKind::Text {
                text: "plain".to_string()
            }
        );
    }

    #[test]
    fn paragraph_text_is_trimmed() {
        assert_eq!(
            classify("  hello world  "),
            LineKind::Text {
                text: "hello world".to_string()
            }
        );
    }
}
