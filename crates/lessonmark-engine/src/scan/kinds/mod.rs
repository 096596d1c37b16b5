//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. All marker
//! constants live here; the classifier calls these types and never
//! hardcodes `#`, `` ``` `` or a glyph itself.

pub mod alert;
pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use alert::AlertMarker;
pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
pub use thematic_break::ThematicBreak;
