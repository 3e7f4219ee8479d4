use crate::ast::Node;

use super::kinds::ListKind;

/// Appends a list item to the growing child sequence.
///
/// The item joins the last sibling when that sibling is a list of the same
/// kind; otherwise a new list is opened around it. Bulleted and ordered lists
/// never merge.
pub fn append_list_item(out: &mut Vec<Node>, kind: ListKind, item: Node) {
    if let Some(last) = out.last_mut()
        && let Some(items) = kind.items_mut(last)
    {
        items.push(item);
        return;
    }
    out.push(kind.list(vec![item]));
}
