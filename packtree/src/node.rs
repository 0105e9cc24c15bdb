use crate::bounding_box::BoundingBox;
use crate::entry::Entry;

/// A node in the packed tree.
///
/// Levels produced by the bulk loader are homogeneous: a branch either holds
/// only leaves or only branches, never a mix.
#[derive(Debug, Clone)]
pub(crate) enum Node<T> {
    /// A single entry.
    Leaf(Entry<T>),
    /// An interior node: covering box plus a contiguous block of children.
    Branch {
        bbox: BoundingBox,
        children: Vec<Node<T>>,
    },
}

impl<T> Node<T> {
    pub(crate) fn bbox(&self) -> &BoundingBox {
        match self {
            Node::Leaf(entry) => &entry.bbox,
            Node::Branch { bbox, .. } => bbox,
        }
    }

    /// Number of levels below and including this node. A leaf has height 1.
    pub(crate) fn height(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch { children, .. } => {
                1 + children.iter().map(Node::height).max().unwrap_or(0)
            }
        }
    }
}
