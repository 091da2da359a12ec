pub mod dom_utils;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod dom_snapshot;
pub mod text;
pub mod traverse;

mod types;

pub use crate::traverse::{
    NodeIdAllocator, assign_node_ids, find_element_by_dom_id, find_node_by_id, find_node_by_id_mut,
};
pub use crate::types::{Id, Node, NodeId};
