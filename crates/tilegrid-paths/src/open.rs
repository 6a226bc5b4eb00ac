//! The open set: frontier nodes not yet settled.
//!
//! An array-backed binary min-heap keyed on [`AstarNode::final_cost`]. Every
//! swap also rewrites a dense coordinate → slot index, so a frontier node can
//! be found, re-ranked or removed by coordinate in O(log n).

use tilegrid_core::{Point, Range};

use crate::node::AstarNode;
use crate::slots::SlotIndex;

/// Frontier of a single search, bounded by a node limit.
#[derive(Debug, Clone)]
pub struct OpenSet {
    heap: Vec<AstarNode>,
    slots: SlotIndex,
    limit: usize,
}

impl OpenSet {
    /// Create an empty open set over `bounds` holding at most `node_limit`
    /// nodes at once.
    pub fn new(bounds: Range, node_limit: usize) -> Self {
        Self {
            heap: Vec::with_capacity(node_limit.min(bounds.len())),
            slots: SlotIndex::new(bounds),
            limit: node_limit,
        }
    }

    /// Map rectangle this set indexes.
    pub fn bounds(&self) -> Range {
        self.slots.bounds()
    }

    /// Number of frontier nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is exhausted.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a node.
    ///
    /// Returns `false` and drops the node when the set is full or the node
    /// lies outside the indexed rectangle.
    pub fn add(&mut self, node: AstarNode) -> bool {
        if self.heap.len() >= self.limit || !self.bounds().contains(node.pos) {
            return false;
        }
        debug_assert!(!self.exists(node.pos), "{} is already open", node.pos);
        let i = self.heap.len();
        self.heap.push(node);
        self.slots.set(node.pos, i);
        self.sift_up(i);
        true
    }

    /// Node at `p`, if open.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&AstarNode> {
        self.slots.get(p).map(|i| &self.heap[i])
    }

    /// Whether `p` is open. Out-of-bounds coordinates are never open.
    #[inline]
    pub fn exists(&self, p: Point) -> bool {
        self.slots.get(p).is_some()
    }

    /// The node with the lowest final cost.
    #[inline]
    pub fn shortest_f(&self) -> Option<&AstarNode> {
        self.heap.first()
    }

    /// Remove and return the node with the lowest final cost.
    pub fn pop_shortest_f(&mut self) -> Option<AstarNode> {
        let p = self.shortest_f()?.pos;
        self.remove(p)
    }

    /// Remove the node at `p`.
    ///
    /// The last heap element takes its slot and is sifted back into order.
    pub fn remove(&mut self, p: Point) -> Option<AstarNode> {
        let i = self.slots.get(p)?;
        let last = self.heap.len() - 1;
        self.swap(i, last);
        let node = self.heap.pop()?;
        self.slots.clear(node.pos);
        if i < self.heap.len() && self.sift_down(i) == i {
            self.sift_up(i);
        }
        Some(node)
    }

    /// Re-route the open node at `p` through `parent` with the lower cost
    /// `g`, then restore heap order.
    ///
    /// Returns `false` if `p` is not open.
    pub fn update_parent(&mut self, p: Point, parent: Point, g: f32) -> bool {
        let Some(i) = self.slots.get(p) else {
            return false;
        };
        let node = &mut self.heap[i];
        debug_assert!(g <= node.g, "relaxation must not raise cost at {p}");
        node.parent = parent;
        node.g = g;
        self.sift_up(i);
        true
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn cost(&self, i: usize) -> f32 {
        self.heap[i].final_cost()
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.set(self.heap[a].pos, a);
        self.slots.set(self.heap[b].pos, b);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.cost(parent) > self.cost(i) {
                self.swap(parent, i);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) -> usize {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.cost(left) < self.cost(smallest) {
                smallest = left;
            }
            if right < n && self.cost(right) < self.cost(smallest) {
                smallest = right;
            }
            if smallest == i {
                return i;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
