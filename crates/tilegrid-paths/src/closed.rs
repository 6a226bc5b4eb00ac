//! The closed set: nodes whose route has been settled.

use tilegrid_core::{Point, Range};

use crate::node::AstarNode;
use crate::slots::SlotIndex;

/// Append-only store of settled nodes with O(1) lookup by coordinate.
#[derive(Debug, Clone)]
pub struct ClosedSet {
    nodes: Vec<AstarNode>,
    slots: SlotIndex,
    limit: usize,
}

impl ClosedSet {
    /// Create an empty closed set over `bounds` holding at most
    /// `node_limit` nodes.
    pub fn new(bounds: Range, node_limit: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_limit.min(bounds.len())),
            slots: SlotIndex::new(bounds),
            limit: node_limit,
        }
    }

    /// Number of settled nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been settled yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the node limit has been reached.
    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.limit
    }

    /// Settle a node. Returns `false` and drops it when full or out of bounds.
    pub fn add(&mut self, node: AstarNode) -> bool {
        if self.is_full() || !self.slots.bounds().contains(node.pos) {
            return false;
        }
        self.slots.set(node.pos, self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// Settled node at `p`, if any.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&AstarNode> {
        self.slots.get(p).map(|i| &self.nodes[i])
    }

    /// Whether `p` is settled. Out-of-bounds coordinates never are.
    #[inline]
    pub fn exists(&self, p: Point) -> bool {
        self.slots.get(p).is_some()
    }

    /// The settled node closest to the goal by heuristic. Linear scan; ties
    /// go to the node settled first.
    pub fn shortest_h(&self) -> Option<&AstarNode> {
        self.nodes
            .iter()
            .reduce(|best, n| if n.h < best.h { n } else { best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, h: f32) -> AstarNode {
        AstarNode::new(Point::new(x, 0), Point::new(0, 0), 0.0, h)
    }

    #[test]
    fn add_and_lookup() {
        let mut closed = ClosedSet::new(Range::with_size(5, 1), 5);
        assert!(closed.is_empty());
        closed.add(node(2, 1.0));
        assert!(closed.exists(Point::new(2, 0)));
        assert!(!closed.exists(Point::new(3, 0)));
        assert!(!closed.exists(Point::new(-2, 0)));
        assert_eq!(closed.get(Point::new(2, 0)).unwrap().h, 1.0);
    }

    #[test]
    fn shortest_h_prefers_first_of_ties() {
        let mut closed = ClosedSet::new(Range::with_size(5, 1), 5);
        assert!(closed.shortest_h().is_none());
        closed.add(node(0, 4.0));
        closed.add(node(1, 2.0));
        closed.add(node(2, 3.0));
        closed.add(node(3, 2.0));
        assert_eq!(closed.shortest_h().unwrap().pos, Point::new(1, 0));
    }

    #[test]
    fn respects_node_limit() {
        let mut closed = ClosedSet::new(Range::with_size(5, 1), 2);
        assert!(closed.add(node(0, 0.0)));
        assert!(closed.add(node(1, 0.0)));
        assert!(closed.is_full());
        assert!(!closed.add(node(2, 0.0)));
        assert_eq!(closed.len(), 2);
    }
}
