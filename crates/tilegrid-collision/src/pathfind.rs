//! Path queries on the collision map.

use tilegrid_core::{FPoint, Point, Range};
use tilegrid_paths::{TilePather, astar_search};

use crate::kinds::{CollideType, MovementType};
use crate::map::MapCollision;

/// A path returned by [`MapCollision::compute_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPath {
    /// Tile centers ordered from the reached tile back to the start tile,
    /// both included. Pop from the end to walk it forwards.
    pub points: Vec<FPoint>,
    /// `false` when the node budget ran out and the path leads to the
    /// closest tile found instead of the destination.
    pub reached_goal: bool,
    /// Nodes settled by the search.
    pub explored: usize,
}

impl ComputedPath {
    /// Points in walking order, start tile first.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = FPoint> + '_ {
        self.points.iter().rev().copied()
    }

    /// The tile the path leads to.
    pub fn destination(&self) -> Option<FPoint> {
        self.points.first().copied()
    }
}

/// The map as seen by a searcher with a given movement type.
struct MovementView<'a> {
    map: &'a MapCollision,
    movement: MovementType,
}

impl TilePather for MovementView<'_> {
    fn bounds(&self) -> Range {
        self.map.bounds()
    }

    fn passable(&self, p: Point) -> bool {
        self.map.is_valid_tile(p, self.movement, CollideType::Normal)
    }
}

impl MapCollision {
    /// Search a path from `start` to `end` for an entity moving with
    /// `movement`, settling at most `limit` tiles.
    ///
    /// A `limit` of zero uses the configured default budget. An occupant
    /// on the destination tile does not block the search and is restored
    /// afterwards. When the budget runs out the path leads to the settled
    /// tile closest to `end`.
    ///
    /// Returns `None` when `end` lies outside the map or the path never
    /// leaves the start tile.
    pub fn compute_path(
        &mut self,
        start: FPoint,
        end: FPoint,
        movement: MovementType,
        limit: usize,
    ) -> Option<ComputedPath> {
        let goal = end.tile();
        if self.is_tile_outside_map(goal) {
            return None;
        }
        let origin = start.tile();
        let limit = if limit == 0 {
            self.config.default_path_limit(self.bounds())
        } else {
            limit
        };

        let outcome = {
            let lifted = self.lift_overlay(goal);
            let view = MovementView {
                map: &lifted,
                movement,
            };
            astar_search(&view, origin, goal, limit)
        };

        log::trace!(
            "path {origin} -> {goal}: {}/{limit} nodes settled",
            outcome.explored
        );
        if outcome.reached_goal {
            log::debug!(
                "path {origin} -> {goal}: reached in {} steps, {} nodes",
                outcome.chain.len().saturating_sub(1),
                outcome.explored,
            );
        } else if let Some(closest) = outcome.chain.first() {
            log::warn!(
                "path {origin} -> {goal}: budget of {limit} exhausted, falling back to {closest}"
            );
        }

        if outcome.chain.len() < 2 {
            return None;
        }

        Some(ComputedPath {
            points: outcome.chain.iter().map(|p| p.center()).collect(),
            reached_goal: outcome.reached_goal,
            explored: outcome.explored,
        })
    }
}
