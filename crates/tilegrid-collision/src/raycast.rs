//! Line checks: sight, movement and facing.
//!
//! A line is walked in equal steps along its dominant axis, one unit per
//! step, with the minor axis advancing proportionally. The destination
//! point itself is only sampled when the line length is a whole number.

use tilegrid_core::FPoint;

use crate::kinds::{CheckType, CollideType, Direction, MovementType};
use crate::map::MapCollision;

impl MapCollision {
    /// Walk from `from` to `to` and report whether every sampled point
    /// passes `check`.
    ///
    /// Sight checks stop at walls (the map edge included). Movement checks
    /// stop at the first point invalid for `movement` under
    /// [`CollideType::Normal`].
    pub fn line_check(
        &self,
        from: FPoint,
        to: FPoint,
        check: CheckType,
        movement: MovementType,
    ) -> bool {
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        let steps = dx.max(dy) as u32;
        if steps == 0 {
            return true;
        }

        let (mut step_x, mut step_y) = if dx > dy { (1.0, dy / dx) } else { (dx / dy, 1.0) };
        if from.x > to.x {
            step_x = -step_x;
        }
        if from.y > to.y {
            step_y = -step_y;
        }

        (1..=steps).all(|i| {
            let i = i as f32;
            let p = FPoint::new(from.x + step_x * i, from.y + step_y * i);
            match check {
                CheckType::Sight => !self.is_wall(p),
                CheckType::Movement => self.is_valid_position(p, movement, CollideType::Normal),
            }
        })
    }

    /// Whether nothing blocks sight between the two points.
    pub fn line_of_sight(&self, from: FPoint, to: FPoint) -> bool {
        self.line_check(from, to, CheckType::Sight, MovementType::Normal)
    }

    /// Whether an entity moving with `movement` could travel straight from
    /// `from` to `to`.
    ///
    /// An occupant standing on the destination tile does not block the
    /// check; it is lifted for the duration of the walk and put back after.
    pub fn line_of_movement(&mut self, from: FPoint, to: FPoint, movement: MovementType) -> bool {
        let target = to.tile();
        if self.is_tile_outside_map(target) {
            return false;
        }
        if movement == MovementType::Intangible {
            return true;
        }
        let lifted = self.lift_overlay(target);
        lifted.line_check(from, to, CheckType::Movement, movement)
    }

    /// Whether `to` lies in the frontal half-plane of an entity at `from`
    /// looking towards `direction`.
    ///
    /// Diagonal directions split the plane along the opposite diagonal.
    /// Points exactly on the dividing line are not in front.
    pub fn is_facing(from: FPoint, to: FPoint, direction: Direction) -> bool {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        match direction {
            Direction::SouthWest => dx < dy,
            Direction::West => dx < 0.0,
            Direction::NorthWest => dx < -dy,
            Direction::North => dy < 0.0,
            Direction::NorthEast => dx > dy,
            Direction::East => dx > 0.0,
            Direction::SouthEast => dx > -dy,
            Direction::South => dy > 0.0,
        }
    }
}
