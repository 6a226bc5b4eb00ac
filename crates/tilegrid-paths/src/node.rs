use tilegrid_core::Point;

use crate::distance::euclidean;

/// Weight applied to the heuristic when ranking open nodes.
///
/// Values above 1 make the search greedier: it settles on paths faster but
/// they are no longer guaranteed to be shortest.
pub const HEURISTIC_WEIGHT: f32 = 2.0;

/// A single search node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstarNode {
    pub pos: Point,
    /// Predecessor on the best known route. The start node is its own parent.
    pub parent: Point,
    /// Accumulated cost from the start.
    pub g: f32,
    /// Estimated remaining cost to the goal.
    pub h: f32,
}

impl AstarNode {
    /// Create a node reached from `parent` at cost `g`.
    pub fn new(pos: Point, parent: Point, g: f32, h: f32) -> Self {
        Self { pos, parent, g, h }
    }

    /// The seed node of a search from `pos` towards `goal`.
    pub fn start(pos: Point, goal: Point) -> Self {
        Self::new(pos, pos, 0.0, euclidean(pos, goal))
    }

    /// Ranking cost, `g + 2h`.
    #[inline]
    pub fn final_cost(&self) -> f32 {
        self.g + HEURISTIC_WEIGHT * self.h
    }
}
