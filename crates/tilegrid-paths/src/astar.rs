//! Bounded, weighted A* over a tile grid.
//!
//! Nodes are ranked by `g + 2h` with Euclidean step costs and heuristic, so
//! the search leans towards greedy progress. Work is capped by a node limit:
//! once that many nodes are settled the search stops and reports the
//! settled node that came closest to the goal.

use tilegrid_core::Point;

use crate::closed::ClosedSet;
use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::node::AstarNode;
use crate::open::OpenSet;
use crate::traits::TilePather;

/// Result of [`astar_search`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// Tiles from the reached node back to the start, both included.
    /// Empty only when nothing could be settled.
    pub chain: Vec<Point>,
    /// Whether `chain` ends on the goal rather than the closest approach.
    pub reached_goal: bool,
    /// Number of nodes settled, never more than the limit.
    pub explored: usize,
}

/// Search from `start` to `goal`, settling at most `limit` nodes.
///
/// Both containers live only for the duration of this call.
pub fn astar_search<P>(pather: &P, start: Point, goal: Point, limit: usize) -> SearchOutcome
where
    P: TilePather + ?Sized,
{
    let bounds = pather.bounds();
    let mut open = OpenSet::new(bounds, limit);
    let mut closed = ClosedSet::new(bounds, limit);
    let mut nbrs = Neighbors::new();

    if !open.add(AstarNode::start(start, goal)) {
        return SearchOutcome::default();
    }

    let mut reached_goal = false;
    let mut dropped = 0usize;
    while !closed.is_full() {
        let Some(node) = open.pop_shortest_f() else {
            break;
        };
        let current = node.pos;
        closed.add(node);

        if current == goal {
            reached_goal = true;
            break;
        }

        let keep = |p: Point| bounds.contains(p) && pather.passable(p);
        for &n in nbrs.all(current, keep) {
            if closed.exists(n) {
                continue;
            }
            let g = node.g + euclidean(current, n);
            match open.get(n) {
                None => {
                    if !open.add(AstarNode::new(n, current, g, euclidean(n, goal))) {
                        dropped += 1;
                    }
                }
                Some(existing) if g < existing.g => {
                    open.update_parent(n, current, g);
                }
                Some(_) => {}
            }
        }
    }

    if dropped > 0 {
        log::trace!("astar: open set full, dropped {dropped} inserts");
    }

    let end = if reached_goal {
        Some(goal)
    } else {
        closed.shortest_h().map(|n| n.pos)
    };
    let chain = match end {
        Some(end) => trace_back(&closed, start, end),
        None => Vec::new(),
    };

    SearchOutcome {
        chain,
        reached_goal,
        explored: closed.len(),
    }
}

/// Follow parent links from `end` back to `start`.
fn trace_back(closed: &ClosedSet, start: Point, end: Point) -> Vec<Point> {
    let mut chain = Vec::new();
    let mut cur = end;
    loop {
        chain.push(cur);
        if cur == start || chain.len() > closed.len() {
            break;
        }
        match closed.get(cur) {
            Some(n) => cur = n.parent,
            None => break,
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::TileGrid;

    fn grid(text: &str) -> TileGrid {
        TileGrid::parse(text).unwrap()
    }

    #[test]
    fn straight_line_on_open_ground() {
        let g = TileGrid::new(10, 10);
        let out = astar_search(&g, Point::new(1, 1), Point::new(6, 1), 100);
        assert!(out.reached_goal);
        assert_eq!(out.chain.first(), Some(&Point::new(6, 1)));
        assert_eq!(out.chain.last(), Some(&Point::new(1, 1)));
        assert_eq!(out.chain.len(), 6);
    }

    #[test]
    fn diagonal_steps_are_taken() {
        let g = TileGrid::new(10, 10);
        let out = astar_search(&g, Point::new(0, 0), Point::new(4, 4), 100);
        assert!(out.reached_goal);
        assert_eq!(out.chain.len(), 5);
    }

    #[test]
    fn chain_steps_are_adjacent_and_passable() {
        let g = grid(
            "
            ..........
            .#######..
            .......#..
            #####..#..
            .......#..
            ",
        );
        let out = astar_search(&g, Point::new(0, 4), Point::new(9, 0), 50);
        assert!(out.reached_goal);
        for w in out.chain.windows(2) {
            let d = w[0] - w[1];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1, "{} -> {}", w[0], w[1]);
            assert!(g.passable(w[0]));
        }
    }

    #[test]
    fn unreachable_goal_falls_back_to_closest() {
        let g = grid(
            "
            ...#...
            ...#...
            ...#...
            ",
        );
        let out = astar_search(&g, Point::new(0, 1), Point::new(6, 1), 100);
        assert!(!out.reached_goal);
        // The whole left pocket gets settled.
        assert_eq!(out.explored, 9);
        assert_eq!(out.chain.first(), Some(&Point::new(2, 1)));
        assert_eq!(out.chain.last(), Some(&Point::new(0, 1)));
    }

    #[test]
    fn cheaper_route_reparents_open_node() {
        // (1, 2) is first reached diagonally from (2, 1) at cost 2√2, then
        // re-routed through (2, 2) at cost 2.
        let g = grid(
            "
            ....
            .#..
            ....
            ",
        );
        let out = astar_search(&g, Point::new(3, 2), Point::new(0, 1), 100);
        assert!(out.reached_goal);
        assert_eq!(
            out.chain,
            vec![Point::new(0, 1), Point::new(1, 2), Point::new(2, 2), Point::new(3, 2)]
        );
        let cost: f32 = out.chain.windows(2).map(|w| euclidean(w[0], w[1])).sum();
        assert!((cost - (2.0 + 2.0f32.sqrt())).abs() < 1e-5, "{cost}");
    }

    #[test]
    fn budget_is_respected() {
        let g = TileGrid::new(50, 50);
        for limit in [1, 5, 20] {
            let out = astar_search(&g, Point::new(0, 0), Point::new(49, 49), limit);
            assert!(out.explored <= limit);
            assert!(!out.reached_goal);
        }
    }

    #[test]
    fn start_outside_bounds_yields_nothing() {
        let g = TileGrid::new(5, 5);
        let out = astar_search(&g, Point::new(-1, 0), Point::new(3, 3), 25);
        assert_eq!(out, SearchOutcome::default());
    }

    #[test]
    fn start_equals_goal() {
        let g = TileGrid::new(5, 5);
        let out = astar_search(&g, Point::new(2, 2), Point::new(2, 2), 25);
        assert!(out.reached_goal);
        assert_eq!(out.chain, vec![Point::new(2, 2)]);
        assert_eq!(out.explored, 1);
    }
}
