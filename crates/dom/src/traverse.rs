use crate::dom_utils::get_attr;
use crate::{Id, Node};

/// Assign ids to every node that still has the unset id `Id(0)`.
/// Returns the next free id so callers creating nodes later can continue
/// the sequence without re-walking the tree.
pub fn assign_node_ids(root: &mut Node) -> NodeIdAllocator {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id(0) {
            let id = Id(*next);
            *next = next.wrapping_add(1);
            node.set_id(id);
        }

        match node {
            Node::Document { children, .. } | Node::Element { children, .. } => {
                for c in children {
                    walk(c, next);
                }
            }
            _ => {}
        }
    }

    let mut next = 1;
    walk(root, &mut next);
    NodeIdAllocator { next }
}

/// Hands out node ids past the ones already assigned in a tree.
#[derive(Clone, Copy, Debug)]
pub struct NodeIdAllocator {
    next: u32,
}

impl NodeIdAllocator {
    pub fn alloc(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                if let Some(found) = find_node_by_id(c, id) {
                    return Some(found);
                }
            }
        }
        _ => {}
    }
    None
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                if let Some(found) = find_node_by_id_mut(c, id) {
                    return Some(found);
                }
            }
        }
        _ => {}
    }
    None
}

/// Find the first element whose `id` attribute equals `dom_id`
/// (the markup-level id, not the tree node id).
pub fn find_element_by_dom_id<'a>(node: &'a Node, dom_id: &str) -> Option<&'a Node> {
    if let Node::Element { .. } = node {
        if get_attr(node, "id") == Some(dom_id) {
            return Some(node);
        }
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                if let Some(found) = find_element_by_dom_id(c, dom_id) {
                    return Some(found);
                }
            }
        }
        _ => {}
    }
    None
}

/// Visit every element in document order.
pub fn for_each_element<'a>(node: &'a Node, f: &mut impl FnMut(&'a Node)) {
    if let Node::Element { .. } = node {
        f(node);
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => {
            for c in children {
                for_each_element(c, f);
            }
        }
        _ => {}
    }
}
