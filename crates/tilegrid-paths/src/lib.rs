//! Bounded pathfinding for tile grids.
//!
//! This crate provides a weighted A* search with explicit, per-search
//! containers:
//!
//! - [`AstarNode`]: coordinate, accumulated cost `g`, heuristic `h` and a
//!   back-pointer to the predecessor tile. Ranked by `g + 2h`.
//! - [`OpenSet`]: the frontier, a binary min-heap with a dense coordinate
//!   index so any frontier node can be re-ranked or removed in O(log n).
//! - [`ClosedSet`]: settled nodes, append-only, with a linear
//!   closest-to-goal scan for the budget-exhausted fallback.
//!
//! [`astar_search`] drives the three over any [`TilePather`]. The node limit
//! bounds total work per query; nothing is kept between queries.

mod astar;
mod closed;
mod distance;
mod neighbors;
mod node;
mod open;
mod slots;
mod traits;

pub use astar::{SearchOutcome, astar_search};
pub use closed::ClosedSet;
pub use distance::euclidean;
pub use neighbors::Neighbors;
pub use node::{AstarNode, HEURISTIC_WEIGHT};
pub use open::OpenSet;
pub use traits::TilePather;
