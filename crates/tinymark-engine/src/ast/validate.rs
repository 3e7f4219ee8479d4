use super::{AstError, Node};

/// Checks the structural invariants every parser-produced tree satisfies.
///
/// - the root is a `document` and no other `document` appears below it
/// - heading levels are within 1..=6
/// - `list` holds only `list-item`, `ordered-list` only `ordered-list-item`,
///   and list items appear nowhere else
/// - `text` values are never empty
/// - no `Unknown` nodes and no render-only `div` nodes
/// - leaves carry no children
pub fn validate(root: &Node) -> Result<(), AstError> {
    let Node::Document { children } = root else {
        return Err(AstError::NotDocumentRoot { found: root.kind() });
    };
    children.iter().try_for_each(|c| check(c, root))
}

fn check(node: &Node, parent: &Node) -> Result<(), AstError> {
    match node {
        Node::Document { .. } => return Err(AstError::NestedDocument),
        Node::Unknown => return Err(AstError::UnknownNode),
        Node::Div { .. } => return Err(AstError::RenderOnly(node.kind())),
        Node::Heading { level, .. } if !(1..=6).contains(level) => {
            return Err(AstError::HeadingLevel(*level));
        }
        Node::Text { value } if value.is_empty() => return Err(AstError::EmptyText),
        Node::ListItem { .. } if !matches!(parent, Node::List { .. }) => {
            return Err(misplaced(node, parent));
        }
        Node::OrderedListItem { .. } if !matches!(parent, Node::OrderedList { .. }) => {
            return Err(misplaced(node, parent));
        }
        _ => {}
    }
    if node.is_leaf() {
        return Ok(());
    }

    for child in node.children() {
        let allowed = match node {
            Node::List { .. } => matches!(child, Node::ListItem { .. }),
            Node::OrderedList { .. } => matches!(child, Node::OrderedListItem { .. }),
            _ => true,
        };
        if !allowed {
            return Err(misplaced(child, node));
        }
        check(child, node)?;
    }
    Ok(())
}

fn misplaced(item: &Node, parent: &Node) -> AstError {
    AstError::MisplacedListItem {
        item: item.kind(),
        parent: parent.kind(),
    }
}
