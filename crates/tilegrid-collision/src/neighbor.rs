//! Random placement around a target tile.

use rand::Rng;
use tilegrid_core::{FPoint, Point, Range};

use crate::kinds::{CollideType, MovementType};
use crate::map::MapCollision;

impl MapCollision {
    /// Pick a random tile center within `range` tiles (Chebyshev) of
    /// `target`, for flanking or spawn placement.
    ///
    /// The target tile itself and tiles outside the map are never picked.
    /// Unless `ignore_blocked` is set, only tiles a normal ground entity
    /// could stand on are candidates. With no candidate the target's own
    /// coordinate is returned unchanged.
    pub fn random_neighbor(
        &self,
        target: Point,
        range: i32,
        ignore_blocked: bool,
        rng: &mut impl Rng,
    ) -> FPoint {
        let area = Range::around(target, range).intersect(self.bounds());
        let candidates: Vec<Point> = area
            .iter()
            .filter(|&p| p != target)
            .filter(|&p| {
                ignore_blocked || self.is_valid_tile(p, MovementType::Normal, CollideType::Normal)
            })
            .collect();

        if candidates.is_empty() {
            return target.to_fpoint();
        }
        candidates[rng.random_range(0..candidates.len())].center()
    }
}
