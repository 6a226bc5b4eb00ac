//! Collision queries, sliding movement and pathfinding for tile maps.
//!
//! [`MapCollision`] owns the collision grid of the current map and answers
//! every query against it:
//!
//! | Area | Operations |
//! |---|---|
//! | Classification | [`is_valid_tile`](MapCollision::is_valid_tile), [`is_valid_position`](MapCollision::is_valid_position), [`is_wall`](MapCollision::is_wall), [`is_empty`](MapCollision::is_empty) |
//! | Occupancy | [`block`](MapCollision::block), [`unblock`](MapCollision::unblock) |
//! | Movement | [`move_by`](MapCollision::move_by) and the `small_step*` family |
//! | Lines | [`line_of_sight`](MapCollision::line_of_sight), [`line_of_movement`](MapCollision::line_of_movement), [`is_facing`](MapCollision::is_facing) |
//! | Paths | [`compute_path`](MapCollision::compute_path), [`random_neighbor`](MapCollision::random_neighbor) |
//!
//! Everything runs synchronously on the caller's thread. Only map loading
//! returns errors; a step requested from an already invalid position is a
//! caller bug and panics.

mod config;
mod error;
mod kinds;
mod map;
mod movement;
mod neighbor;
mod pathfind;
mod raycast;

pub use config::CollisionConfig;
pub use error::{CollisionError, Result};
pub use kinds::{CheckType, CollideType, Direction, MovementType};
pub use map::MapCollision;
pub use movement::{MIN_TILE_GAP, MoveOutcome};
pub use pathfind::ComputedPath;

pub use tilegrid_core::{FPoint, Point, Range, Tile, TileError, TileGrid};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = CollisionConfig::default()
            .with_ally_collision(true)
            .with_path_limit_divisor(4);
        let json = serde_json::to_string(&c).unwrap();
        let back: CollisionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn missing_config_fields_take_defaults() {
        let back: CollisionConfig = serde_json::from_str(r#"{"allow_ally_collision":true}"#).unwrap();
        assert!(back.allow_ally_collision);
        assert_eq!(back.path_limit_divisor, 10);

        let back: CollisionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(back, CollisionConfig::default());
    }

    #[test]
    fn kinds_round_trip() {
        let json = serde_json::to_string(&Direction::NorthEast).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Direction::NorthEast);

        let json = serde_json::to_string(&MovementType::Flying).unwrap();
        let back: MovementType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MovementType::Flying);
    }
}
