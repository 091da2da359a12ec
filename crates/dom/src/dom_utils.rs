use crate::traverse::{find_node_by_id_mut, for_each_element};
use crate::{Id, Node};

pub fn get_attr<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

/// Whether the attribute is present at all, valueless boolean attributes
/// (`selected`, `checked`) included.
pub fn has_attr(node: &Node, key: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
        }
        _ => false,
    }
}

pub fn set_attr(node: &mut Node, key: &str, value: &str) {
    if let Node::Element { attributes, .. } = node {
        if let Some(slot) = attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            slot.1 = Some(value.to_string());
        } else {
            attributes.push((key.to_string(), Some(value.to_string())));
        }
    }
}

pub fn remove_attr(node: &mut Node, key: &str) {
    if let Node::Element { attributes, .. } = node {
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
    }
}

/// The element's `class` attribute, or "" when absent.
pub fn class_attr(node: &Node) -> &str {
    get_attr(node, "class").unwrap_or("")
}

/// Exact class-token membership, matching what the rendering engine's
/// class selectors would match.
pub fn has_class(node: &Node, class: &str) -> bool {
    class_attr(node).split_ascii_whitespace().any(|t| t == class)
}

/// Overwrite the whole class attribute, a `className`-style write.
pub fn set_class(node: &mut Node, value: &str) {
    set_attr(node, "class", value);
}

pub fn style_prop<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { style, .. } => style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str()),
        _ => None,
    }
}

pub fn set_style_prop(node: &mut Node, name: &str, value: &str) {
    if let Node::Element { style, .. } = node {
        if let Some(slot) = style.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            slot.1 = value.to_string();
        } else {
            style.push((name.to_ascii_lowercase(), value.to_string()));
        }
    }
}

pub fn remove_style_prop(node: &mut Node, name: &str) {
    if let Node::Element { style, .. } = node {
        style.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }
}

/// Collect the tree ids of every element carrying `class`, in document order.
pub fn collect_ids_with_class(root: &Node, class: &str) -> Vec<Id> {
    let mut out = Vec::new();
    for_each_element(root, &mut |el| {
        if has_class(el, class) {
            out.push(el.id());
        }
    });
    out
}

/// Detach the child with tree id `child_id` from the node `parent_id`,
/// transferring ownership of the subtree to the caller.
/// Returns the removed subtree and its former child position.
pub fn remove_child(root: &mut Node, parent_id: Id, child_id: Id) -> Option<(Node, usize)> {
    let parent = find_node_by_id_mut(root, parent_id)?;
    let children = parent.children_mut()?;
    let pos = children.iter().position(|c| c.id() == child_id)?;
    log::trace!(target: "dom", "detach node {} from {} at child {pos}", child_id.0, parent_id.0);
    Some((children.remove(pos), pos))
}

/// Insert `node` as a child of `parent_id` at `pos` (clamped to the end).
pub fn insert_child(root: &mut Node, parent_id: Id, pos: usize, node: Node) -> bool {
    let Some(parent) = find_node_by_id_mut(root, parent_id) else {
        return false;
    };
    let Some(children) = parent.children_mut() else {
        return false;
    };
    let pos = pos.min(children.len());
    children.insert(pos, node);
    true
}

pub fn append_child(root: &mut Node, parent_id: Id, node: Node) -> bool {
    let Some(parent) = find_node_by_id_mut(root, parent_id) else {
        return false;
    };
    let Some(children) = parent.children_mut() else {
        return false;
    };
    children.push(node);
    true
}
