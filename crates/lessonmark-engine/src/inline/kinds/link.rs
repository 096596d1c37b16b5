/// Link inline type with owned delimiter constants: `[text](href)`.
pub struct LinkRef;

impl LinkRef {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}

/// Image inline type: `![alt](src)`. Shares the bracket grammar of
/// [`LinkRef`] behind a `!` sigil, and is tried before links so the
/// leading `![` is never consumed as plain text plus a link.
pub struct ImageRef;

impl ImageRef {
    pub const SIGIL: &'static [u8; 2] = b"![";
}
