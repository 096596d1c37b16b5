/// Blockquote block type with owned delimiter constant.
///
/// Each `>`-prefixed line is its own quote block; consecutive quote lines
/// are not merged.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix and one optional following space.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_quote_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }
}
