//! Step resolution and sliding movement.
//!
//! A requested displacement is consumed in increments that never cross more
//! than one tile boundary per axis. Each increment is tried directly; when
//! blocked, diagonal motion slides along the grid axes and single-axis motion
//! is nudged sideways around corners, so entities glide along walls instead
//! of stopping dead.
//!
//! Every function here requires the source position to be valid for the
//! given movement and collide types. Callers must check with
//! [`MapCollision::is_valid_position`] first; a violation panics.

use tilegrid_core::{FPoint, Point};

use crate::kinds::{CollideType, MovementType};
use crate::map::MapCollision;

/// Smallest distance to a tile boundary treated as "not flush" with it.
pub const MIN_TILE_GAP: f32 = 0.001;

/// Where a [`MapCollision::move_by`] call left the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Final position; the last valid point reached on a partial move.
    pub pos: FPoint,
    /// Whether the whole displacement was consumed.
    pub full_move: bool,
}

fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Next increment along one axis: up to the next tile boundary, or a whole
/// tile when already flush against one, never beyond `rest`.
fn next_increment(at: f32, rest: f32) -> f32 {
    if rest > 0.0 {
        let inc = (at.ceil() - at).min(rest);
        if inc <= MIN_TILE_GAP { rest.min(1.0) } else { inc }
    } else if rest < 0.0 {
        let inc = (at.floor() - at).max(rest);
        if inc >= -MIN_TILE_GAP { rest.max(-1.0) } else { inc }
    } else {
        0.0
    }
}

impl MapCollision {
    #[track_caller]
    fn assert_valid_source(&self, pos: FPoint, movement: MovementType, collide: CollideType) {
        assert!(
            self.is_valid_position(pos, movement, collide),
            "step requested from invalid position {pos} ({movement:?}, {collide:?})"
        );
    }

    /// Try to move straight from `pos` by `step`.
    ///
    /// # Panics
    ///
    /// If `pos` is not a valid position.
    pub fn small_step(
        &self,
        pos: FPoint,
        step: FPoint,
        movement: MovementType,
        collide: CollideType,
    ) -> Option<FPoint> {
        self.assert_valid_source(pos, movement, collide);
        let next = pos + step;
        self.is_valid_position(next, movement, collide).then_some(next)
    }

    /// Resolve a blocked diagonal increment by keeping only its X part, or
    /// failing that, only its Y part.
    ///
    /// # Panics
    ///
    /// If `pos` is not a valid position.
    pub fn small_step_forced_slide_along_grid(
        &self,
        pos: FPoint,
        step: FPoint,
        movement: MovementType,
        collide: CollideType,
    ) -> Option<FPoint> {
        self.assert_valid_source(pos, movement, collide);
        let along_x = FPoint::new(pos.x + step.x, pos.y);
        let along_y = FPoint::new(pos.x, pos.y + step.y);
        if self.is_valid_position(along_x, movement, collide) {
            Some(along_x)
        } else if self.is_valid_position(along_y, movement, collide) {
            Some(along_y)
        } else {
            None
        }
    }

    /// Resolve a blocked single-axis increment by nudging sideways.
    ///
    /// If the tile beside the entity and the tile diagonally ahead on that
    /// same side are both free, the entity shifts towards them by at most
    /// the step length, choosing the side of the tile centre it stands on.
    ///
    /// A nudge down or right stops exactly on the tile edge. A nudge up or
    /// left crosses it by [`MIN_TILE_GAP`] so the entity lands inside the
    /// free tile: from `y = 1.2` with a step of `0.5` it ends at `y = 0.999`.
    ///
    /// # Panics
    ///
    /// If `pos` is not a valid position.
    pub fn small_step_forced_slide(
        &self,
        pos: FPoint,
        step: FPoint,
        movement: MovementType,
        collide: CollideType,
    ) -> Option<FPoint> {
        self.assert_valid_source(pos, movement, collide);
        let tile = pos.tile();
        let free = |p: Point| self.is_valid_tile(p, movement, collide);

        let next = if step.x != 0.0 {
            let reach = step.x.abs();
            let ahead = tile.x + sign(step.x);
            let dy = pos.y - pos.y.floor();
            if dy > 0.5 && free(tile.shift(0, 1)) && free(Point::new(ahead, tile.y + 1)) {
                FPoint::new(pos.x, pos.y + (1.0 - dy).min(reach))
            } else if dy < 0.5 && free(tile.shift(0, -1)) && free(Point::new(ahead, tile.y - 1)) {
                FPoint::new(pos.x, pos.y - (dy + MIN_TILE_GAP).min(reach))
            } else {
                return None;
            }
        } else if step.y != 0.0 {
            let reach = step.y.abs();
            let ahead = tile.y + sign(step.y);
            let dx = pos.x - pos.x.floor();
            if dx > 0.5 && free(tile.shift(1, 0)) && free(Point::new(tile.x + 1, ahead)) {
                FPoint::new(pos.x + (1.0 - dx).min(reach), pos.y)
            } else if dx < 0.5 && free(tile.shift(-1, 0)) && free(Point::new(tile.x - 1, ahead)) {
                FPoint::new(pos.x - (dx + MIN_TILE_GAP).min(reach), pos.y)
            } else {
                return None;
            }
        } else {
            return Some(pos);
        };

        debug_assert!(self.is_valid_position(next, movement, collide));
        Some(next)
    }

    /// Move from `pos` by `step`, sliding along obstacles.
    ///
    /// Stops at the last valid point when an increment cannot be resolved
    /// and reports `full_move = false`.
    ///
    /// # Panics
    ///
    /// If `pos` is not a valid position or `step` is not finite.
    pub fn move_by(
        &self,
        pos: FPoint,
        step: FPoint,
        movement: MovementType,
        collide: CollideType,
    ) -> MoveOutcome {
        assert!(
            step.x.is_finite() && step.y.is_finite(),
            "non-finite step {step}"
        );
        let force_slide = step.x != 0.0 && step.y != 0.0;

        let mut pos = pos;
        let mut rest = step;
        while rest.x != 0.0 || rest.y != 0.0 {
            let inc = FPoint::new(next_increment(pos.x, rest.x), next_increment(pos.y, rest.y));
            rest = rest - inc;

            let resolved = self.small_step(pos, inc, movement, collide).or_else(|| {
                // Once one axis of a diagonal move is used up, the grid slide
                // along it is zero-length and succeeds in place, so the move
                // still reports `full_move` while held against the wall.
                if force_slide {
                    self.small_step_forced_slide_along_grid(pos, inc, movement, collide)
                } else {
                    self.small_step_forced_slide(pos, inc, movement, collide)
                }
            });
            match resolved {
                Some(next) => pos = next,
                None => {
                    return MoveOutcome {
                        pos,
                        full_move: false,
                    };
                }
            }
        }

        MoveOutcome {
            pos,
            full_move: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionConfig;
    use tilegrid_core::TileGrid;

    const N: MovementType = MovementType::Normal;
    const C: CollideType = CollideType::Normal;

    fn map(text: &str) -> MapCollision {
        MapCollision::with_grid(TileGrid::parse(text).unwrap(), CollisionConfig::default())
    }

    fn close(a: FPoint, b: FPoint) -> bool {
        a.distance(b) < 1e-4
    }

    #[test]
    fn increments_stop_at_tile_boundaries() {
        assert_eq!(next_increment(0.25, 2.0), 0.75);
        assert_eq!(next_increment(1.0, 2.0), 1.0);
        assert_eq!(next_increment(1.0, 0.3), 0.3);
        assert_eq!(next_increment(1.75, -2.0), -0.75);
        assert_eq!(next_increment(1.0, -2.0), -1.0);
        assert_eq!(next_increment(3.5, 0.0), 0.0);
        assert_eq!(next_increment(0.9995, 0.5), 0.5);
    }

    #[test]
    fn small_step_moves_or_refuses() {
        let m = map("..#");
        let from = FPoint::new(0.5, 0.5);
        assert_eq!(m.small_step(from, FPoint::new(1.0, 0.0), N, C), Some(FPoint::new(1.5, 0.5)));
        assert_eq!(m.small_step(FPoint::new(1.5, 0.5), FPoint::new(1.0, 0.0), N, C), None);
    }

    #[test]
    #[should_panic(expected = "invalid position")]
    fn small_step_from_inside_a_wall_panics() {
        let m = map(".#.");
        m.small_step(FPoint::new(1.5, 0.5), FPoint::new(0.5, 0.0), N, C);
    }

    #[test]
    #[should_panic(expected = "invalid position")]
    fn move_from_outside_the_map_panics() {
        let m = map("...");
        m.move_by(FPoint::new(-1.0, 0.5), FPoint::new(1.0, 0.0), N, C);
    }

    #[test]
    fn open_ground_moves_fully() {
        let m = map(
            "
            .....
            .....
            .....
            ",
        );
        let out = m.move_by(FPoint::new(0.5, 0.5), FPoint::new(3.2, 1.9), N, C);
        assert!(out.full_move);
        assert!(close(out.pos, FPoint::new(3.7, 2.4)), "{}", out.pos);
    }

    #[test]
    fn blocked_straight_move_stops_at_wall() {
        let m = map(
            "
            ###
            ..#
            ###
            ",
        );
        let out = m.move_by(FPoint::new(0.5, 1.5), FPoint::new(3.0, 0.0), N, C);
        assert!(!out.full_move);
        assert_eq!(out.pos.tile(), Point::new(1, 1));
        assert!(out.pos.x < 2.0);
    }

    #[test]
    fn diagonal_move_slides_along_wall() {
        // Wall along the top; moving up-right keeps the X part.
        let m = map(
            "
            ######
            ......
            ......
            ",
        );
        let out = m.move_by(FPoint::new(0.5, 1.5), FPoint::new(2.0, -2.0), N, C);
        assert!(out.full_move);
        assert!(out.pos.x > 2.0, "{}", out.pos);
        assert_eq!(out.pos.tile().y, 1);
    }

    #[test]
    fn straight_move_is_nudged_around_a_corner() {
        // Moving right from the lower half of row 1 into the wall at (2, 1):
        // the row below is open, so the entity slides down.
        let m = map(
            "
            ....
            ..#.
            ....
            ",
        );
        let from = FPoint::new(1.5, 1.8);
        let slid = m.small_step_forced_slide(from, FPoint::new(0.5, 0.0), N, C).unwrap();
        assert_eq!(slid.x, from.x);
        assert!(close(slid, FPoint::new(1.5, 2.0)), "{slid}");

        let up = m.small_step_forced_slide(FPoint::new(1.5, 1.2), FPoint::new(0.5, 0.0), N, C).unwrap();
        assert!(close(up, FPoint::new(1.5, 1.0 - MIN_TILE_GAP)), "{up}");
        assert_eq!(up.tile(), Point::new(1, 0));

        let left = m.small_step_forced_slide(FPoint::new(1.2, 0.5), FPoint::new(0.0, 0.5), N, C).unwrap();
        assert!(close(left, FPoint::new(1.0 - MIN_TILE_GAP, 0.5)), "{left}");
        assert_eq!(left.tile(), Point::new(0, 0));
    }

    #[test]
    fn nudge_is_bounded_by_step() {
        let m = map(
            "
            ....
            ..#.
            ....
            ",
        );
        let slid = m.small_step_forced_slide(FPoint::new(1.5, 1.6), FPoint::new(0.1, 0.0), N, C).unwrap();
        assert!(close(slid, FPoint::new(1.5, 1.7)), "{slid}");
    }

    #[test]
    fn nudge_refused_in_a_corridor() {
        let m = map(
            "
            ####
            ..#.
            ####
            ",
        );
        assert_eq!(m.small_step_forced_slide(FPoint::new(1.5, 1.8), FPoint::new(0.5, 0.0), N, C), None);
        assert_eq!(m.small_step_forced_slide(FPoint::new(1.5, 1.2), FPoint::new(0.5, 0.0), N, C), None);
    }

    #[test]
    fn slide_along_grid_prefers_x() {
        let m = map(
            "
            ...
            ...
            ",
        );
        let from = FPoint::new(0.5, 0.5);
        assert_eq!(
            m.small_step_forced_slide_along_grid(from, FPoint::new(1.0, 1.0), N, C),
            Some(FPoint::new(1.5, 0.5))
        );
        let m = map(
            "
            .#.
            ...
            ",
        );
        assert_eq!(
            m.small_step_forced_slide_along_grid(from, FPoint::new(1.0, 1.0), N, C),
            Some(FPoint::new(0.5, 1.5))
        );
        let m = map(
            "
            .#.
            #..
            ",
        );
        assert_eq!(m.small_step_forced_slide_along_grid(from, FPoint::new(1.0, 1.0), N, C), None);
    }

    #[test]
    fn diagonal_move_held_by_wall_on_spent_axis_reports_full_move() {
        let m = map(
            "
            ...
            ...
            ###
            ",
        );
        let out = m.move_by(FPoint::new(0.5, 0.5), FPoint::new(0.3, 2.5), N, C);
        assert!(out.full_move);
        assert!(close(out.pos, FPoint::new(0.8, 1.0)), "{}", out.pos);
    }

    #[test]
    fn flying_crosses_water_ground_does_not() {
        let m = map(".~.");
        let from = FPoint::new(0.5, 0.5);
        let step = FPoint::new(2.0, 0.0);
        assert!(m.move_by(from, step, MovementType::Flying, C).full_move);
        assert!(!m.move_by(from, step, N, C).full_move);
    }

    #[test]
    fn move_never_teleports() {
        let m = map(
            "
            ..........
            ..#....#..
            ..#.##.#..
            ....#.....
            .##.#..##.
            ..........
            ",
        );
        let starts = [
            FPoint::new(0.5, 0.5),
            FPoint::new(3.3, 3.7),
            FPoint::new(5.5, 3.5),
            FPoint::new(9.9, 5.1),
            FPoint::new(6.01, 1.99),
        ];
        let steps = [
            FPoint::new(1.7, 0.0),
            FPoint::new(0.0, -2.3),
            FPoint::new(2.5, 2.5),
            FPoint::new(-3.1, 0.4),
            FPoint::new(-0.2, -4.0),
            FPoint::new(4.0, -1.0),
            FPoint::new(0.05, 0.05),
        ];
        for from in starts {
            assert!(m.is_valid_position(from, N, C));
            for step in steps {
                let out = m.move_by(from, step, N, C);
                assert!(m.is_valid_position(out.pos, N, C));
                assert!(
                    from.distance(out.pos) <= step.length() + 1e-4,
                    "{from} + {step} -> {}",
                    out.pos
                );
            }
        }
    }
}
