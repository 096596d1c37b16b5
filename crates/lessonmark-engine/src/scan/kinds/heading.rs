/// Heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level the renderer produces. Raw counts above this
    /// are clamped when the render tag is chosen.
    pub const MAX_RENDER_LEVEL: u8 = 4;

    /// Strips the leading `#` run and exactly one following space.
    ///
    /// Returns the raw (unclamped) marker count and the remaining text.
    /// `None` when the line is not a heading (no `#` run, or no space
    /// after it).
    pub fn strip_marker(s: &str) -> Option<(u8, &str)> {
        let run = s.bytes().take_while(|&b| b == Self::MARKER).count();
        if run == 0 {
            return None;
        }
        let text = s[run..].strip_prefix(' ')?;
        Some((run.min(u8::MAX as usize) as u8, text))
    }

    pub fn clamp_level(level: u8) -> u8 {
        level.min(Self::MAX_RENDER_LEVEL)
    }
}
