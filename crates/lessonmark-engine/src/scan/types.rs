/// Which marker family a list block was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- `, `* ` or `+ ` items.
    Bulleted,
    /// `1. `, `2. ` ... items.
    Numbered,
}

/// The kind of an alert block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// ⚠️ warning box.
    Warning,
    /// 💡 info box.
    Info,
}

/// A scanned block in source order. Exactly one kind per block.
///
/// Textual payloads are raw: inline markup is recognized later, by the
/// renderer, via [`crate::inline::parse_inline`]. Code block lines are
/// verbatim and never inline-parsed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with the raw `#` count. Clamping to the maximum render
    /// level happens at render time, not here.
    Heading { level: u8, text: String },
    /// Fenced code block. `lang` defaults to `"text"` for a bare fence.
    CodeBlock { lang: String, lines: Vec<String> },
    /// Consecutive list items of one marker kind.
    List { kind: ListKind, items: Vec<String> },
    /// A single `>`-prefixed line. Consecutive quote lines are separate
    /// blocks.
    Blockquote { text: String },
    /// A `---` divider line.
    HorizontalRule,
    /// A glyph-marked alert box (`⚠️ **...**` / `💡 **...**`).
    Alert { kind: AlertKind, text: String },
    /// Any other non-blank line.
    Paragraph { text: String },
}
