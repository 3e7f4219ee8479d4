use std::sync::OnceLock;

use regex::Regex;

use crate::ast::Node;

/// Bulleted (`- `) or ordered (`1. `) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// Wraps inline content into this kind's item node.
    pub fn item(self, children: Vec<Node>) -> Node {
        match self {
            ListKind::Bullet => Node::ListItem { children },
            ListKind::Ordered => Node::OrderedListItem { children },
        }
    }

    /// Opens a new list of this kind.
    pub fn list(self, items: Vec<Node>) -> Node {
        match self {
            ListKind::Bullet => Node::List { children: items },
            ListKind::Ordered => Node::OrderedList { children: items },
        }
    }

    /// The item sequence of `node` if it is a list of this kind.
    pub fn items_mut(self, node: &mut Node) -> Option<&mut Vec<Node>> {
        match (self, node) {
            (ListKind::Bullet, Node::List { children })
            | (ListKind::Ordered, Node::OrderedList { children }) => Some(children),
            _ => None,
        }
    }
}

/// One list-item line with its leading indentation discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    /// Everything after the single separator whitespace.
    pub content: &'a str,
}

impl<'a> ListItem<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let bullet = BULLET.get_or_init(|| Regex::new(r"^\s*-\s(.*)$").expect("Invalid bullet regex"));
        let ordered =
            ORDERED.get_or_init(|| Regex::new(r"^\s*\d+\.\s(.*)$").expect("Invalid ordered list regex"));

        let (kind, caps) = match bullet.captures(line) {
            Some(caps) => (ListKind::Bullet, caps),
            None => (ListKind::Ordered, ordered.captures(line)?),
        };
        Some(ListItem {
            kind,
            content: caps.get(1)?.as_str(),
        })
    }
}
