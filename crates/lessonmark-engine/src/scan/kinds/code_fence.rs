/// Code fence block type with owned delimiter constants.
///
/// Fenced code blocks are raw zones: no block or inline scanning happens
/// inside them.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// Language label used when a fence carries no tag.
    pub const DEFAULT_LANG: &'static str = "text";

    /// Returns the text after the fence marker when `trimmed` is a fence
    /// line, `None` otherwise.
    pub fn sig(trimmed: &str) -> Option<&str> {
        trimmed.strip_prefix(Self::FENCE)
    }

    /// Resolves the language tag captured from an opening fence.
    pub fn language(tag: &str) -> String {
        let tag = tag.trim();
        if tag.is_empty() {
            Self::DEFAULT_LANG.to_string()
        } else {
            tag.to_string()
        }
    }
}
