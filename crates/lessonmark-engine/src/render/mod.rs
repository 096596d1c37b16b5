//! # Render Composition
//!
//! Maps scanned [`Block`]s to a [`RenderNode`] tree, invoking the inline
//! formatter for every textual run. Code block bodies are emitted as
//! literal text and never inline-formatted.
//!
//! Each code block gets a copy button with a deterministic `code-N` id
//! from an [`IdAllocator`] scoped to the render pass; the button is
//! decorated from the injected [`CopyFeedback`] so the display layer can
//! show transient "Copied!" state without owning any logic of its own.

pub mod ids;
pub mod node;

pub use ids::IdAllocator;
pub use node::{NodeContent, RenderNode};

use std::time::Instant;

use crate::clipboard::CopyFeedback;
use crate::inline::{InlineSpan, parse_inline};
use crate::scan::{AlertKind, Block, ListKind, kinds::Heading, scan_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub theme: Theme,
}

/// Placeholder text shown when a lesson has no content yet.
pub const EMPTY_PLACEHOLDER: &str = "No content available";

/// Renders with default options and no copy feedback. Hosts that wire up
/// a clipboard use [`Renderer`] directly.
pub fn render(source: Option<&str>) -> Vec<RenderNode> {
    Renderer::new(RenderOptions::default()).render(source, &CopyFeedback::default(), Instant::now())
}

pub struct Renderer {
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Renders `source` into an ordered node sequence, one node per
    /// block. Absent or empty input yields a single placeholder node,
    /// never an empty sequence. Total: no input can make this fail.
    pub fn render(
        &self,
        source: Option<&str>,
        feedback: &CopyFeedback,
        now: Instant,
    ) -> Vec<RenderNode> {
        let mut ids = IdAllocator::new();
        self.render_with_ids(source, feedback, now, &mut ids)
    }

    /// Like [`render`](Self::render) with a caller-supplied id counter.
    /// The same blocks and the same starting counter produce identical
    /// ids.
    pub fn render_with_ids(
        &self,
        source: Option<&str>,
        feedback: &CopyFeedback,
        now: Instant,
        ids: &mut IdAllocator,
    ) -> Vec<RenderNode> {
        let blocks = source.map(scan_document).unwrap_or_default();
        if blocks.is_empty() {
            return vec![self.empty_placeholder()];
        }
        blocks
            .iter()
            .map(|block| self.render_block(block, feedback, now, ids))
            .collect()
    }

    fn empty_placeholder(&self) -> RenderNode {
        RenderNode::text("div", EMPTY_PLACEHOLDER).with_attr("class", self.class("lesson-empty"))
    }

    fn render_block(
        &self,
        block: &Block,
        feedback: &CopyFeedback,
        now: Instant,
        ids: &mut IdAllocator,
    ) -> RenderNode {
        match block {
            Block::Heading { level, text } => {
                let tag = format!("h{}", Heading::clamp_level(*level));
                RenderNode::children(&tag, self.inline_run(text))
                    .with_attr("class", self.class("lesson-heading"))
            }
            Block::Paragraph { text } => RenderNode::children("p", self.inline_run(text))
                .with_attr("class", self.class("lesson-paragraph")),
            Block::Blockquote { text } => {
                RenderNode::children("blockquote", self.inline_run(text))
                    .with_attr("class", self.class("lesson-quote"))
            }
            Block::HorizontalRule => {
                RenderNode::empty("hr").with_attr("class", self.class("lesson-rule"))
            }
            Block::List { kind, items } => self.render_list(*kind, items),
            Block::Alert { kind, text } => self.render_alert(*kind, text),
            Block::CodeBlock { lang, lines } => {
                self.render_code_block(lang, lines, feedback, now, ids)
            }
        }
    }

    fn render_list(&self, kind: ListKind, items: &[String]) -> RenderNode {
        let tag = match kind {
            ListKind::Bulleted => "ul",
            ListKind::Numbered => "ol",
        };
        let children = items
            .iter()
            .map(|item| RenderNode::children("li", self.inline_run(item)))
            .collect();
        RenderNode::children(tag, children).with_attr("class", self.class("lesson-list"))
    }

    fn render_alert(&self, kind: AlertKind, text: &str) -> RenderNode {
        let (modifier, label) = match kind {
            AlertKind::Warning => ("lesson-alert--warning", "Warning:"),
            AlertKind::Info => ("lesson-alert--info", "Note:"),
        };
        let mut children = vec![RenderNode::text("strong", label)];
        children.extend(self.inline_run(text));
        RenderNode::children("div", children)
            .with_attr("class", format!("{} {modifier}", self.class("lesson-alert")))
    }

    /// A code block is a composite node: a header with the language label
    /// and copy button, then the literal body. The body text is exactly
    /// the captured lines joined by newlines.
    fn render_code_block(
        &self,
        lang: &str,
        lines: &[String],
        feedback: &CopyFeedback,
        now: Instant,
        ids: &mut IdAllocator,
    ) -> RenderNode {
        let id = ids.next_code_id();
        let copied = feedback.is_copied(&id, now);

        let button = RenderNode::text("button", if copied { "Copied!" } else { "Copy" })
            .with_attr("class", self.class("lesson-code__copy"))
            .with_attr("data-copy-id", id)
            .with_attr("data-copied", if copied { "true" } else { "false" });

        let header = RenderNode::children(
            "div",
            vec![
                RenderNode::text("span", lang).with_attr("class", self.class("lesson-code__lang")),
                button,
            ],
        )
        .with_attr("class", self.class("lesson-code__header"));

        let body = RenderNode::children("pre", vec![RenderNode::text("code", lines.join("\n"))])
            .with_attr("class", self.class("lesson-code__body"));

        RenderNode::children("div", vec![header, body])
            .with_attr("class", self.class("lesson-code"))
            .with_attr("data-lang", lang)
    }

    fn inline_run(&self, text: &str) -> Vec<RenderNode> {
        parse_inline(text)
            .iter()
            .map(|span| self.render_span(span))
            .collect()
    }

    fn render_span(&self, span: &InlineSpan) -> RenderNode {
        match span {
            InlineSpan::Text(text) => RenderNode::text("span", text.clone()),
            InlineSpan::Bold(run) => RenderNode::children("strong", self.spans(run)),
            InlineSpan::Italic(run) => RenderNode::children("em", self.spans(run)),
            InlineSpan::Underline(run) => RenderNode::children("u", self.spans(run)),
            InlineSpan::Code(text) => RenderNode::text("code", text.clone())
                .with_attr("class", self.class("lesson-inline-code")),
            InlineSpan::Link { href, text } => RenderNode::text("a", text.clone())
                .with_attr("href", href.clone())
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer"),
            InlineSpan::Image { src, alt } => RenderNode::empty("img")
                .with_attr("src", src.clone())
                .with_attr("alt", alt.clone())
                .with_attr("class", self.class("lesson-image")),
        }
    }

    fn spans(&self, run: &[InlineSpan]) -> Vec<RenderNode> {
        run.iter().map(|span| self.render_span(span)).collect()
    }

    fn class(&self, base: &str) -> String {
        match self.opts.theme {
            Theme::Light => base.to_string(),
            Theme::Dark => format!("{base} {base}--dark"),
        }
    }
}
