use std::collections::BTreeMap;

use serde::Serialize;

/// A display-framework-agnostic output node: a tag, unique string
/// attributes, and either literal text or ordered children.
///
/// Trees are produced fresh on every render call and owned solely by the
/// caller; the engine keeps no reference to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub tag: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    pub content: NodeContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeContent {
    /// Self-closing node (`hr`, `img`).
    Empty,
    /// Literal text content, never re-interpreted as markup.
    Text(String),
    Children(Vec<RenderNode>),
}

impl RenderNode {
    pub fn empty(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            content: NodeContent::Empty,
        }
    }

    pub fn text(tag: &str, text: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            content: NodeContent::Text(text.into()),
        }
    }

    pub fn children(tag: &str, children: Vec<RenderNode>) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            content: NodeContent::Children(children),
        }
    }

    /// Sets an attribute, replacing any previous value for the key.
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    /// Concatenated text of this node and its descendants.
    pub fn flattened_text(&self) -> String {
        match &self.content {
            NodeContent::Empty => String::new(),
            NodeContent::Text(t) => t.clone(),
            NodeContent::Children(children) => {
                children.iter().map(RenderNode::flattened_text).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_attr_replaces_previous_value() {
        let node = RenderNode::empty("hr")
            .with_attr("class", "a")
            .with_attr("class", "b");
        assert_eq!(node.attrs.get("class").map(String::as_str), Some("b"));
        assert_eq!(node.attrs.len(), 1);
    }

    #[test]
    fn flattened_text_walks_children() {
        let node = RenderNode::children(
            "p",
            vec![
                RenderNode::text("span", "a "),
                RenderNode::children("strong", vec![RenderNode::text("span", "b")]),
            ],
        );
        assert_eq!(node.flattened_text(), "a b");
    }
}
