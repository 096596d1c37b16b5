/// A parsed inline span.
///
/// Emphasis spans carry a nested run, but the single-pass recognizer only
/// ever fills it with plain text: bold/italic/underline interiors are not
/// re-scanned for further markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// `**...**`
    Bold(Vec<InlineSpan>),
    /// `*...*`
    Italic(Vec<InlineSpan>),
    /// `__...__`
    Underline(Vec<InlineSpan>),
    /// `` `...` `` — a raw zone; the content is literal.
    Code(String),
    /// `[text](href)`
    Link { href: String, text: String },
    /// `![alt](src)`
    Image { src: String, alt: String },
}
