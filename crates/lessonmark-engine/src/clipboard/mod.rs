//! # Clipboard Side-Channel
//!
//! Best-effort "copy code block to clipboard" with transient UI feedback.
//!
//! [`Clipboard`] writes through a primary [`ClipboardWriter`] backend and
//! an optional fallback tried when the primary fails. [`Clipboard::copy`]
//! never panics and never propagates an error: failures are logged and
//! surfaced as `false`.
//!
//! [`CopyFeedback`] tracks which copy button was most recently used. At
//! most one id is marked at a time and the mark expires
//! [`FEEDBACK_WINDOW`] after the copy. There is no background timer: the
//! host's event loop either polls [`CopyFeedback::is_copied`] with the
//! current time or schedules a deferred [`Clipboard::expire`] call, which
//! is guarded by generation so a stale reset cannot clear a newer mark.

pub mod system;

use std::time::{Duration, Instant};

pub use system::{CommandClipboard, detect_backend};

/// How long a copy button stays in its "Copied!" state.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard not available")]
    NotAvailable,
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// A destination for clipboard text. Implemented by the detected system
/// backend; hosts with their own clipboard access (a web view, a GUI
/// toolkit) inject their own implementation.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    /// Short backend name for logging.
    fn name(&self) -> &'static str;
}

/// A writer for contexts with no clipboard access at all.
#[derive(Debug, Default)]
pub struct UnavailableClipboard;

impl ClipboardWriter for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotAvailable)
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}

#[derive(Debug)]
struct CopiedMark {
    id: String,
    expires_at: Instant,
    generation: u64,
}

/// Which copy button is currently showing feedback.
///
/// Owned by one [`Clipboard`] per active renderer; all mutation happens on
/// the UI thread.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied: Option<CopiedMark>,
    generation: u64,
}

impl CopyFeedback {
    /// Marks `id` as copied at `now`, superseding any previous mark.
    /// Returns the generation to pass to a scheduled [`expire`](Self::expire).
    pub fn mark(&mut self, id: &str, now: Instant) -> u64 {
        self.generation += 1;
        self.copied = Some(CopiedMark {
            id: id.to_string(),
            expires_at: now + FEEDBACK_WINDOW,
            generation: self.generation,
        });
        self.generation
    }

    /// Whether `id` is marked copied and the feedback window has not
    /// elapsed.
    pub fn is_copied(&self, id: &str, now: Instant) -> bool {
        self.copied
            .as_ref()
            .is_some_and(|m| m.id == id && now < m.expires_at)
    }

    /// The currently marked id, if its window has not elapsed.
    pub fn copied_id(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|m| now < m.expires_at)
            .map(|m| m.id.as_str())
    }

    /// Deferred-reset callback. Clears the mark only if it still belongs
    /// to the copy that scheduled this reset; a reset left over from a
    /// superseded copy is a no-op.
    pub fn expire(&mut self, generation: u64) {
        if self
            .copied
            .as_ref()
            .is_some_and(|m| m.generation == generation)
        {
            self.copied = None;
        }
    }
}

/// Copy action plus feedback state, one instance per active renderer.
pub struct Clipboard {
    primary: Box<dyn ClipboardWriter>,
    fallback: Option<Box<dyn ClipboardWriter>>,
    feedback: CopyFeedback,
}

impl Clipboard {
    pub fn new(
        primary: Box<dyn ClipboardWriter>,
        fallback: Option<Box<dyn ClipboardWriter>>,
    ) -> Self {
        Self {
            primary,
            fallback,
            feedback: CopyFeedback::default(),
        }
    }

    /// Auto-detects the platform clipboard tool. Falls back to a writer
    /// that reports every copy as failed when nothing is available.
    pub fn detect() -> Self {
        match detect_backend() {
            Some((primary, fallback)) => {
                tracing::info!(backend = primary.name(), "clipboard backend detected");
                Self::new(
                    Box::new(primary),
                    fallback.map(|f| Box::new(f) as Box<dyn ClipboardWriter>),
                )
            }
            None => {
                tracing::info!("no clipboard backend available");
                Self::new(Box::new(UnavailableClipboard), None)
            }
        }
    }

    /// Copies `text` on behalf of the copy button `id`.
    ///
    /// On success the feedback mark is set for `id` and `true` is
    /// returned. On failure the error is logged and `false` is returned;
    /// no error propagates to the caller.
    pub fn copy(&mut self, text: &str, id: &str, now: Instant) -> bool {
        match self.write(text) {
            Ok(backend) => {
                tracing::debug!(backend, id, bytes = text.len(), "clipboard write");
                self.feedback.mark(id, now);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "clipboard write failed");
                false
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(self.primary.name()),
            Err(err) => {
                let Some(fallback) = self.fallback.as_mut() else {
                    return Err(err);
                };
                tracing::warn!(
                    error = %err,
                    fallback = fallback.name(),
                    "primary clipboard failed, trying fallback"
                );
                fallback.write_text(text)?;
                Ok(fallback.name())
            }
        }
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Generation of the most recent successful copy, for scheduling the
    /// deferred reset.
    pub fn generation(&self) -> u64 {
        self.feedback.generation
    }

    /// See [`CopyFeedback::expire`].
    pub fn expire(&mut self, generation: u64) {
        self.feedback.expire(generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records writes instead of touching the real clipboard.
    #[derive(Default, Clone)]
    struct MemoryClipboard {
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "memory"
        }
    }

    struct FailingClipboard;

    impl ClipboardWriter for FailingClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::WriteFailed("permission denied".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn clipboard_with_memory() -> (Clipboard, MemoryClipboard) {
        let memory = MemoryClipboard::default();
        let clip = Clipboard::new(Box::new(memory.clone()), None);
        (clip, memory)
    }

    #[test]
    fn copy_marks_id_immediately() {
        let (mut clip, _memory) = clipboard_with_memory();
        let now = Instant::now();

        assert!(clip.copy("hello", "code-0", now));
        assert!(clip.feedback().is_copied("code-0", now));
        assert_eq!(clip.feedback().copied_id(now), Some("code-0"));
    }

    #[test]
    fn mark_expires_after_window() {
        let (mut clip, _memory) = clipboard_with_memory();
        let now = Instant::now();

        clip.copy("hello", "code-0", now);
        let later = now + FEEDBACK_WINDOW + Duration::from_millis(1);
        assert!(!clip.feedback().is_copied("code-0", later));
        assert_eq!(clip.feedback().copied_id(later), None);
    }

    #[test]
    fn mark_holds_just_inside_window() {
        let (mut clip, _memory) = clipboard_with_memory();
        let now = Instant::now();

        clip.copy("hello", "code-0", now);
        let almost = now + FEEDBACK_WINDOW - Duration::from_millis(1);
        assert!(clip.feedback().is_copied("code-0", almost));
    }

    #[test]
    fn later_copy_supersedes_earlier_mark() {
        let (mut clip, _memory) = clipboard_with_memory();
        let now = Instant::now();

        clip.copy("a", "code-0", now);
        clip.copy("b", "code-1", now + Duration::from_millis(500));

        let check = now + Duration::from_millis(600);
        assert!(!clip.feedback().is_copied("code-0", check));
        assert!(clip.feedback().is_copied("code-1", check));
    }

    #[test]
    fn stale_reset_does_not_clear_newer_mark() {
        let (mut clip, _memory) = clipboard_with_memory();
        let now = Instant::now();

        clip.copy("a", "code-0", now);
        let first_generation = clip.generation();
        clip.copy("b", "code-1", now + Duration::from_millis(500));

        // The first copy's timer fires after the second copy happened.
        clip.expire(first_generation);
        assert!(
            clip.feedback()
                .is_copied("code-1", now + Duration::from_millis(600))
        );

        // The second copy's own timer still works.
        clip.expire(clip.generation());
        assert!(
            !clip
                .feedback()
                .is_copied("code-1", now + Duration::from_millis(600))
        );
    }

    #[test]
    fn failure_returns_false_and_marks_nothing() {
        let mut clip = Clipboard::new(Box::new(FailingClipboard), None);
        let now = Instant::now();

        assert!(!clip.copy("hello", "code-0", now));
        assert!(!clip.feedback().is_copied("code-0", now));
    }

    #[test]
    fn fallback_writer_is_used_when_primary_fails() {
        let memory = MemoryClipboard::default();
        let mut clip = Clipboard::new(Box::new(FailingClipboard), Some(Box::new(memory.clone())));
        let now = Instant::now();

        assert!(clip.copy("hello", "code-0", now));
        assert_eq!(memory.writes.borrow().as_slice(), ["hello".to_string()]);
        assert!(clip.feedback().is_copied("code-0", now));
    }

    #[test]
    fn unavailable_clipboard_reports_failure() {
        let mut clip = Clipboard::new(Box::new(UnavailableClipboard), None);
        assert!(!clip.copy("hello", "code-0", Instant::now()));
    }

    #[test]
    fn copied_text_reaches_the_writer() {
        let (mut clip, memory) = clipboard_with_memory();
        clip.copy("let x = 1;", "code-0", Instant::now());
        assert_eq!(memory.writes.borrow().as_slice(), ["let x = 1;".to_string()]);
    }
}
