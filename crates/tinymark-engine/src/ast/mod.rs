//! # Document Tree
//!
//! The typed tree produced by [`crate::parse`]. It is the wire contract between
//! the parsing core and any renderer, so the serialized shape is fixed:
//!
//! - every node carries a `type` discriminator (`"list-item"`, `"code-block"`, ...)
//! - container nodes carry `children`, leaves do not
//! - `code-block.language` and `image.title` are always present (`null` when absent)
//! - `code-block.meta` and `link.title` are omitted when absent
//!
//! The tree is a plain owned tree: each node is owned by its parent's `children`.

mod validate;

use serde::{Deserialize, Serialize};

pub use validate::validate;

/// Errors from the AST wire helpers and structural validation.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("root node must be a document, found `{found}`")]
    NotDocumentRoot { found: &'static str },
    #[error("document nodes may only appear at the root")]
    NestedDocument,
    #[error("heading level {0} is outside 1..=6")]
    HeadingLevel(u8),
    #[error("`{item}` may not appear inside `{parent}`")]
    MisplacedListItem {
        item: &'static str,
        parent: &'static str,
    },
    #[error("text nodes must not be empty")]
    EmptyText,
    #[error("tree contains a node of unknown type")]
    UnknownNode,
    #[error("`{0}` nodes are accepted by renderers but never parsed")]
    RenderOnly(&'static str),
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// The root. Always present, even for empty input.
    Document {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Default block for lines no other construct claims.
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        /// Length of the leading `#` run, 1..=6.
        level: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// One per `>` line; consecutive quote lines are not merged.
    Quote {
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(default)]
        children: Vec<Node>,
    },
    OrderedList {
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    OrderedListItem {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Emitted for each physically empty line.
    LineBreak,
    HorizontalRule,
    /// A fenced code block. `value` excludes the fence lines.
    CodeBlock {
        #[serde(default)]
        language: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<String>,
        value: String,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Image {
        alt: String,
        src: String,
        #[serde(default)]
        title: Option<String>,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strikethrough {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Inline code span.
    Code { value: String },
    /// Literal text, with escapes already resolved.
    Text { value: String },
    /// Generic container accepted from foreign trees. The parser never emits it.
    Div {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// A node whose `type` this crate does not know.
    ///
    /// Only produced when deserializing a foreign tree; the parser never emits it.
    #[serde(other)]
    Unknown,
}

impl Node {
    pub fn document(children: Vec<Node>) -> Self {
        Node::Document { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn code(value: impl Into<String>) -> Self {
        Node::Code {
            value: value.into(),
        }
    }

    /// The `type` discriminator as it appears on the wire.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Document { .. } => "document",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Quote { .. } => "quote",
            Node::List { .. } => "list",
            Node::OrderedList { .. } => "ordered-list",
            Node::ListItem { .. } => "list-item",
            Node::OrderedListItem { .. } => "ordered-list-item",
            Node::LineBreak => "line-break",
            Node::HorizontalRule => "horizontal-rule",
            Node::CodeBlock { .. } => "code-block",
            Node::Link { .. } => "link",
            Node::Image { .. } => "image",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong",
            Node::Strikethrough { .. } => "strikethrough",
            Node::Code { .. } => "code",
            Node::Text { .. } => "text",
            Node::Div { .. } => "div",
            Node::Unknown => "unknown",
        }
    }

    /// Child nodes; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Quote { children }
            | Node::List { children }
            | Node::OrderedList { children }
            | Node::ListItem { children }
            | Node::OrderedListItem { children }
            | Node::Link { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Strikethrough { children }
            | Node::Div { children } => children,
            Node::LineBreak
            | Node::HorizontalRule
            | Node::CodeBlock { .. }
            | Node::Image { .. }
            | Node::Code { .. }
            | Node::Text { .. }
            | Node::Unknown => &[],
        }
    }

    /// Returns true for node types that never carry children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::LineBreak
                | Node::HorizontalRule
                | Node::CodeBlock { .. }
                | Node::Image { .. }
                | Node::Code { .. }
                | Node::Text { .. }
                | Node::Unknown
        )
    }

    /// Serializes the tree to compact JSON.
    pub fn to_json(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the tree to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a tree from JSON without validating its structure.
    ///
    /// Unrecognised `type` values become [`Node::Unknown`]; call [`validate`]
    /// to reject trees the parser could not have produced.
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        Ok(serde_json::from_str(json)?)
    }
}
