//! Sort-tile-recursive (STR) bulk loading.
//!
//! Entries are packed bottom-up: sort by bounding-box center x, partition
//! into vertical slices, sort each slice by center y, cut into tiles of node
//! capacity. Each tile becomes a branch, and the resulting branch level is
//! packed again until at most `capacity` nodes remain under the root. Sorts
//! are stable, so equal keys preserve input order and the output tree is
//! deterministic for a given input sequence and capacity.

use std::cmp::Ordering;

use crate::bounding_box::BoundingBox;
use crate::entry::Entry;
use crate::node::Node;

/// Packs `entries` into the root node of a balanced tree with the given node
/// capacity. The caller has already validated the capacity.
pub(crate) fn pack<T>(entries: Vec<Entry<T>>, capacity: usize) -> Node<T> {
    let mut nodes: Vec<Node<T>> = entries.into_iter().map(Node::Leaf).collect();

    if nodes.is_empty() {
        return Node::Branch {
            bbox: BoundingBox::empty(),
            children: Vec::new(),
        };
    }
    if nodes.len() == 1 {
        return nodes.remove(0);
    }

    while nodes.len() > capacity {
        nodes = pack_level(nodes, capacity);
    }

    let bbox = enclosing_bbox(&nodes);
    Node::Branch {
        bbox,
        children: nodes,
    }
}

/// Packs one level of nodes into tiles of at most `capacity`, producing the
/// next level up.
fn pack_level<T>(mut nodes: Vec<Node<T>>, capacity: usize) -> Vec<Node<T>> {
    let count = nodes.len();
    let tile_count = count.div_ceil(capacity);
    let slice_count = (tile_count as f64).sqrt().ceil() as usize;
    let slice_size = count.div_ceil(slice_count);

    nodes.sort_by(|a, b| {
        center_x(a.bbox())
            .partial_cmp(&center_x(b.bbox()))
            .unwrap_or(Ordering::Equal)
    });

    let mut packed = Vec::with_capacity(tile_count + slice_count);
    let mut remaining = nodes.into_iter();
    loop {
        let mut slice: Vec<Node<T>> = remaining.by_ref().take(slice_size).collect();
        if slice.is_empty() {
            break;
        }
        slice.sort_by(|a, b| {
            center_y(a.bbox())
                .partial_cmp(&center_y(b.bbox()))
                .unwrap_or(Ordering::Equal)
        });

        let mut tiles = slice.into_iter();
        loop {
            let children: Vec<Node<T>> = tiles.by_ref().take(capacity).collect();
            if children.is_empty() {
                break;
            }
            let bbox = enclosing_bbox(&children);
            packed.push(Node::Branch { bbox, children });
        }
    }

    log::trace!("packed level of {} nodes into {} tiles", count, packed.len());
    packed
}

fn enclosing_bbox<T>(nodes: &[Node<T>]) -> BoundingBox {
    nodes
        .iter()
        .fold(BoundingBox::empty(), |acc, node| acc.union(node.bbox()))
}

fn center_x(bbox: &BoundingBox) -> f32 {
    bbox.center().0
}

fn center_y(bbox: &BoundingBox) -> f32 {
    bbox.center().1
}
