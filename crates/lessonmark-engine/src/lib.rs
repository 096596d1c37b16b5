pub mod clipboard;
pub mod inline;
pub mod render;
pub mod scan;

// Re-export key types for easier usage
pub use clipboard::{Clipboard, ClipboardError, ClipboardWriter, CopyFeedback};
pub use inline::{InlineSpan, parse_inline};
pub use render::{
    IdAllocator, NodeContent, RenderNode, RenderOptions, Renderer, Theme, render,
};
pub use scan::{AlertKind, Block, ListKind, scan_document};
