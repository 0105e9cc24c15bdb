//! The immutable packed R-tree.

use crate::bounding_box::BoundingBox;
use crate::bulk_loader;
use crate::constants::{DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY};
use crate::distance::DistanceCalculator;
use crate::entry::Entry;
use crate::errors::{IndexError, IndexResult};
use crate::node::Node;

/// An immutable, bulk-loaded 2D spatial index over rectangles with payloads.
///
/// The tree is packed once from a flat entry sequence and never mutated;
/// structural updates ([`merge`](RTree::merge), [`diff`](RTree::diff),
/// [`update`](RTree::update)) produce a fresh tree and leave the receiver
/// untouched. Any number of threads may share a tree without
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use packtree::{BoundingBox, Entry, EuclideanPlane, RTree};
///
/// let entries = vec![
///     Entry::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "a"),
///     Entry::new(BoundingBox::new(2.0, 2.0, 3.0, 3.0), "b"),
/// ];
/// let tree = RTree::bulk_load(entries)?;
///
/// let hits = tree.find_containing(0.5, 0.5);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].value, "a");
///
/// let nearest = tree.find_nearest(1.5, 1.5, None, &EuclideanPlane);
/// assert!(nearest.is_some());
/// # Ok::<(), packtree::IndexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RTree<T> {
    root: Node<T>,
    capacity: usize,
    len: usize,
}

impl<T> RTree<T> {
    /// Bulk loads a tree with the default node capacity.
    pub fn bulk_load(entries: Vec<Entry<T>>) -> IndexResult<Self> {
        Self::bulk_load_with_capacity(entries, DEFAULT_NODE_CAPACITY)
    }

    /// Bulk loads a tree with an explicit node capacity.
    ///
    /// Packs the entries sort-tile-recursively into a balanced tree where
    /// every leaf sits at the same depth. The output is deterministic for a
    /// given input sequence and capacity.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCapacity`] when `capacity` is below
    /// [`MIN_NODE_CAPACITY`].
    pub fn bulk_load_with_capacity(entries: Vec<Entry<T>>, capacity: usize) -> IndexResult<Self> {
        if capacity < MIN_NODE_CAPACITY {
            return Err(IndexError::InvalidCapacity(capacity));
        }
        let len = entries.len();
        log::debug!("bulk loading {} entries with node capacity {}", len, capacity);
        let root = bulk_loader::pack(entries, capacity);
        Ok(Self {
            root,
            capacity,
            len,
        })
    }

    /// The bounding box covering every entry, or the canonical empty box for
    /// a tree with no entries.
    pub fn mbr(&self) -> &BoundingBox {
        self.root.bbox()
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The node capacity the tree was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of levels in the tree. An empty tree has height 0, a tree with
    /// a single entry has height 1.
    pub fn height(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.root.height()
        }
    }

    /// Invokes `visitor` on every entry whose bounding box contains the
    /// point, stopping as soon as the visitor returns true.
    ///
    /// If the visitor never returns true, it is invoked exactly once per
    /// matching entry. Nothing is allocated beyond the recursion stack.
    pub fn visit_containing<F>(&self, x: f32, y: f32, mut visitor: F)
    where
        F: FnMut(&Entry<T>) -> bool,
    {
        visit_containing_node(&self.root, x, y, &mut visitor);
    }

    /// Invokes `visitor` on every entry whose bounding box intersects the
    /// query rectangle, stopping as soon as the visitor returns true.
    pub fn visit_intersecting<F>(&self, query: &BoundingBox, mut visitor: F)
    where
        F: FnMut(&Entry<T>) -> bool,
    {
        visit_intersecting_node(&self.root, query, &mut visitor);
    }

    /// Finds every entry whose bounding box contains the point, edges
    /// inclusive, in traversal order.
    pub fn find_containing(&self, x: f32, y: f32) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut found = Vec::new();
        self.visit_containing(x, y, |entry| {
            found.push(entry.clone());
            false
        });
        found
    }

    /// Finds every entry whose bounding box intersects the query rectangle,
    /// in traversal order. Touching edges count as intersection.
    pub fn find_intersecting(&self, query: &BoundingBox) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut found = Vec::new();
        self.visit_intersecting(query, |entry| {
            found.push(entry.clone());
            false
        });
        found
    }

    /// Finds every entry whose bounding box lies entirely inside the query
    /// rectangle, in traversal order.
    pub fn find_within(&self, query: &BoundingBox) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut found = Vec::new();
        self.visit_intersecting(query, |entry| {
            if query.contains(&entry.bbox) {
                found.push(entry.clone());
            }
            false
        });
        found
    }

    /// Finds the entry nearest to `(x, y)` under the given calculator.
    ///
    /// Returns the minimum-distance entry among those strictly closer than
    /// `max_distance` (unbounded when `None`), or `None` when no entry
    /// qualifies. Branches are pruned against the running best distance and
    /// visited in ascending order of their bounding-box distance, so ties
    /// between equidistant entries resolve deterministically to the first
    /// one visited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use packtree::{BoundingBox, Entry, RTree, SphericalEarth};
    ///
    /// // x is latitude, y is longitude for the spherical calculator.
    /// let cities = vec![
    ///     Entry::new(BoundingBox::new(40.70, -74.02, 40.72, -74.00), "nyc"),
    ///     Entry::new(BoundingBox::new(34.04, -118.25, 34.06, -118.23), "la"),
    /// ];
    /// let tree = RTree::bulk_load(cities)?;
    ///
    /// let (km, hit) = tree.find_nearest(42.36, -71.06, None, &SphericalEarth).unwrap();
    /// assert_eq!(hit.value, "nyc");
    /// assert!(km < 400.0);
    /// # Ok::<(), packtree::IndexError>(())
    /// ```
    pub fn find_nearest<C>(
        &self,
        x: f32,
        y: f32,
        max_distance: Option<f64>,
        calculator: &C,
    ) -> Option<(f64, Entry<T>)>
    where
        T: Clone,
        C: DistanceCalculator + ?Sized,
    {
        let mut bound = max_distance.unwrap_or(f64::INFINITY);
        let mut best: Option<(f64, &Entry<T>)> = None;
        nearest_node(&self.root, x, y, calculator, &mut bound, &mut best);
        best.map(|(dist, entry)| (dist, entry.clone()))
    }

    /// Returns a copy of every entry in traversal order.
    ///
    /// The order is deterministic for a given tree but unrelated to the
    /// order entries were supplied in.
    pub fn entries(&self) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut found = Vec::with_capacity(self.len);
        collect_entries(&self.root, &mut found);
        found
    }

    /// Builds a new tree holding this tree's entries plus `insertions`,
    /// packed with the given capacity. The receiver is unchanged.
    pub fn merge(&self, insertions: &[Entry<T>], capacity: usize) -> IndexResult<Self>
    where
        T: Clone,
    {
        log::debug!(
            "merging {} insertions into a tree of {} entries",
            insertions.len(),
            self.len
        );
        let mut combined = self.entries();
        combined.extend_from_slice(insertions);
        Self::bulk_load_with_capacity(combined, capacity)
    }

    /// Builds a new tree holding this tree's entries minus `removals`,
    /// packed with the given capacity.
    ///
    /// Removal is multiset difference under structural equality: each
    /// removal instance cancels the first matching entry in traversal order,
    /// and removals with no match are silently ignored.
    pub fn diff(&self, removals: &[Entry<T>], capacity: usize) -> IndexResult<Self>
    where
        T: Clone + PartialEq,
    {
        self.update(removals, &[], capacity)
    }

    /// Builds a new tree equal to `self.diff(removals)` followed by
    /// `merge(insertions)`, materializing the entry sequence only once.
    pub fn update(
        &self,
        removals: &[Entry<T>],
        insertions: &[Entry<T>],
        capacity: usize,
    ) -> IndexResult<Self>
    where
        T: Clone + PartialEq,
    {
        log::debug!(
            "updating a tree of {} entries: {} removals, {} insertions",
            self.len,
            removals.len(),
            insertions.len()
        );
        let mut pending: Vec<&Entry<T>> = removals.iter().collect();
        let mut combined = Vec::with_capacity(self.len + insertions.len());
        for entry in self.entries() {
            match pending.iter().position(|removal| **removal == entry) {
                Some(idx) => {
                    pending.remove(idx);
                }
                None => combined.push(entry),
            }
        }
        combined.extend_from_slice(insertions);
        Self::bulk_load_with_capacity(combined, capacity)
    }
}

fn visit_containing_node<T, F>(node: &Node<T>, x: f32, y: f32, visitor: &mut F) -> bool
where
    F: FnMut(&Entry<T>) -> bool,
{
    match node {
        Node::Leaf(entry) => entry.bbox.contains_point(x, y) && visitor(entry),
        Node::Branch { bbox, children } => {
            if !bbox.contains_point(x, y) {
                return false;
            }
            for child in children {
                if visit_containing_node(child, x, y, visitor) {
                    return true;
                }
            }
            false
        }
    }
}

fn visit_intersecting_node<T, F>(node: &Node<T>, query: &BoundingBox, visitor: &mut F) -> bool
where
    F: FnMut(&Entry<T>) -> bool,
{
    match node {
        Node::Leaf(entry) => entry.bbox.intersects(query) && visitor(entry),
        Node::Branch { bbox, children } => {
            if !bbox.intersects(query) {
                return false;
            }
            for child in children {
                if visit_intersecting_node(child, query, visitor) {
                    return true;
                }
            }
            false
        }
    }
}

fn collect_entries<T: Clone>(node: &Node<T>, found: &mut Vec<Entry<T>>) {
    match node {
        Node::Leaf(entry) => found.push(entry.clone()),
        Node::Branch { children, .. } => {
            for child in children {
                collect_entries(child, found);
            }
        }
    }
}

fn nearest_node<'a, T, C>(
    node: &'a Node<T>,
    x: f32,
    y: f32,
    calculator: &C,
    bound: &mut f64,
    best: &mut Option<(f64, &'a Entry<T>)>,
) where
    C: DistanceCalculator + ?Sized,
{
    match node {
        Node::Leaf(entry) => {
            let dist = calculator.distance(x, y, &entry.bbox);
            if dist < *bound {
                *bound = dist;
                *best = Some((dist, entry));
            }
        }
        Node::Branch { children, .. } => {
            // Children are visited in ascending bounding-box distance by
            // repeated in-place selection, ties broken by position. Nothing
            // is allocated off the recursion stack.
            let mut last_visited: Option<(f64, usize)> = None;
            loop {
                let mut next: Option<(f64, usize)> = None;
                for (idx, child) in children.iter().enumerate() {
                    let dist = calculator.distance(x, y, child.bbox());
                    if dist.is_nan() {
                        continue;
                    }
                    if let Some((last_dist, last_idx)) = last_visited {
                        if dist < last_dist || (dist == last_dist && idx <= last_idx) {
                            continue;
                        }
                    }
                    let closer = match next {
                        Some((next_dist, next_idx)) => {
                            dist < next_dist || (dist == next_dist && idx < next_idx)
                        }
                        None => true,
                    };
                    if closer {
                        next = Some((dist, idx));
                    }
                }
                let Some((dist, idx)) = next else {
                    break;
                };
                // Selection is ascending, so the first child at or past the
                // bound ends the branch.
                if dist >= *bound {
                    break;
                }
                nearest_node(&children[idx], x, y, calculator, bound, best);
                last_visited = Some((dist, idx));
            }
        }
    }
}
