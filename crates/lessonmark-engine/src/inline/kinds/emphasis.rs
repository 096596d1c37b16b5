/// Emphasis delimiters.
///
/// Bold is tried before italic so `**` is never consumed as two italic
/// markers; underline is the lowest-precedence rule.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static [u8; 2] = b"**";
    pub const ITALIC: u8 = b'*';
    pub const UNDERLINE: &'static [u8; 2] = b"__";
}
