//! # Block Scanning
//!
//! Two-phase block scanning over the lesson markdown dialect.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing only local facts (fence marker, heading level,
//!    list marker kind, alert glyph, blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds at most one
//!    open aggregator (an in-progress code block or list) and emits `Block`s
//!    in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListKind`, `AlertKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, ListMarker, BlockQuote, AlertMarker, ThematicBreak)
//! - **`classify`**: `LessonLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks are emitted in source order; none are dropped or reordered
//! - Fenced code blocks are raw zones: lines inside (blank lines included)
//!   are captured verbatim and never inline-parsed
//! - An unterminated code block or list at end-of-input is flushed as a
//!   final block, never discarded
//! - Consecutive list items of differing kinds never merge into one list

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LessonLineClassifier, LineClass, LineKind};
pub use types::{AlertKind, Block, ListKind};

/// Scans source text into an ordered sequence of [`Block`]s.
///
/// Total over all inputs: any string (including empty) is accepted and the
/// empty string yields an empty sequence.
pub fn scan_document(source: &str) -> Vec<Block> {
    let classifier = LessonLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in source.split('\n') {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}
