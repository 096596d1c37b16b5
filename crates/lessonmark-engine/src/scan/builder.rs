use super::{
    classify::{LineClass, LineKind},
    types::{Block, ListKind},
};

/// At most one multi-line construct is open at a time: an in-progress code
/// block or an in-progress list. Opening a different construct implicitly
/// closes and emits the previous one.
#[derive(Debug, Clone)]
enum Aggregator {
    None,
    Code { lang: String, lines: Vec<String> },
    List { kind: ListKind, items: Vec<String> },
}

pub struct BlockBuilder {
    open: Aggregator,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: Aggregator::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, lc: &LineClass) {
        if self.in_code() {
            self.consume_code_line(lc);
            return;
        }

        match &lc.kind {
            LineKind::Blank => self.flush_list(),
            LineKind::Fence { lang } => {
                self.flush_list();
                self.open = Aggregator::Code {
                    lang: lang.clone(),
                    lines: vec![],
                };
            }
            LineKind::ListItem { kind, text } => self.push_list_item(*kind, text),
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.out.push(Block::Heading {
                    level: *level,
                    text: text.clone(),
                });
            }
            LineKind::Rule => {
                self.flush_list();
                self.out.push(Block::HorizontalRule);
            }
            LineKind::Quote { text } => {
                self.flush_list();
                self.out.push(Block::Blockquote { text: text.clone() });
            }
            LineKind::Alert { kind, text } => {
                self.flush_list();
                self.out.push(Block::Alert {
                    kind: *kind,
                    text: text.clone(),
                });
            }
            LineKind::Text { text } => {
                self.flush_list();
                self.out.push(Block::Paragraph { text: text.clone() });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated list or code block is emitted, not
        // dropped.
        self.flush_list();
        self.flush_code();
        self.out
    }

    fn in_code(&self) -> bool {
        matches!(self.open, Aggregator::Code { .. })
    }

    fn consume_code_line(&mut self, lc: &LineClass) {
        // A closing fence line ends the block; its trailing text is ignored.
        if matches!(lc.kind, LineKind::Fence { .. }) {
            self.flush_code();
            return;
        }
        if let Aggregator::Code { lines, .. } = &mut self.open {
            lines.push(lc.raw.clone());
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str) {
        match &mut self.open {
            Aggregator::List {
                kind: open_kind,
                items,
            } if *open_kind == kind => items.push(text.to_string()),
            _ => {
                self.flush_list();
                self.open = Aggregator::List {
                    kind,
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.open, Aggregator::None);
        if let Aggregator::List { kind, items } = prev {
            self.out.push(Block::List { kind, items });
        } else {
            self.open = prev; // put back a non-list aggregator
        }
    }

    fn flush_code(&mut self) {
        let prev = std::mem::replace(&mut self.open, Aggregator::None);
        if let Aggregator::Code { lang, lines } = prev {
            self.out.push(Block::CodeBlock { lang, lines });
        } else {
            self.open = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::LessonLineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Vec<Block> {
        let classifier = LessonLineClassifier;
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(&classifier.classify(line));
        }
        builder.finish()
    }

    #[test]
    fn consecutive_items_accumulate() {
        assert_eq!(
            build(&["- a", "- b", "- c"]),
            vec![Block::List {
                kind: ListKind::Bulleted,
                items: vec!["a".to_string(), "b".to_string(), "c".to_string()]
            }]
        );
    }

    #[test]
    fn blank_line_closes_list() {
        assert_eq!(
            build(&["- a", "", "- b"]),
            vec![
                Block::List {
                    kind: ListKind::Bulleted,
                    items: vec!["a".to_string()]
                },
                Block::List {
                    kind: ListKind::Bulleted,
                    items: vec!["b".to_string()]
                },
            ]
        );
    }

    #[test]
    fn fence_closes_open_list() {
        assert_eq!(
            build(&["- a", "```", "x", "```"]),
            vec![
                Block::List {
                    kind: ListKind::Bulleted,
                    items: vec!["a".to_string()]
                },
                Block::CodeBlock {
                    lang: "text".to_string(),
                    lines: vec!["x".to_string()]
                },
            ]
        );
    }

    #[test]
    fn marker_lines_inside_fence_stay_verbatim() {
        assert_eq!(
            build(&["```md", "# not a heading", "- not a list", "```"]),
            vec![Block::CodeBlock {
                lang: "md".to_string(),
                lines: vec!["# not a heading".to_string(), "- not a list".to_string()]
            }]
        );
    }

    #[test]
    fn closing_fence_trailing_text_is_ignored() {
        assert_eq!(
            build(&["```js", "x", "``` trailing"]),
            vec![Block::CodeBlock {
                lang: "js".to_string(),
                lines: vec!["x".to_string()]
            }]
        );
    }

    #[test]
    fn unterminated_list_is_flushed_at_eof() {
        assert_eq!(
            build(&["1. a", "2. b"]),
            vec![Block::List {
                kind: ListKind::Numbered,
                items: vec!["a".to_string(), "b".to_string()]
            }]
        );
    }
}
