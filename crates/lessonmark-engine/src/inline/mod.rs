//! # Inline Formatting
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block scanning and operates over the
//! text of one inline-eligible run (paragraph, heading, list item, quote
//! or alert body). Code block bodies never reach this module.
//!
//! Recognition runs at each position in fixed precedence order: inline
//! code, image, link, bold, italic, underline. A span's inner text is
//! taken directly at match time and never re-scanned by a lower-precedence
//! rule, so `` `**x**` `` is a code span and a link URL can never be
//! misread as emphasis markup.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with save/restore
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*`
//!   helpers
//!
//! ## Failure Policy
//!
//! Malformed or unterminated syntax (an unmatched backtick, a link without
//! its `(url)`) restores the cursor and is emitted as literal text. There
//! is no error path.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineSpan;
