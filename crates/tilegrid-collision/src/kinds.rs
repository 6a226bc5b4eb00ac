//! Per-entity and per-query classifications.

/// Which terrain an entity can cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementType {
    /// Ground movement, stopped by every blocking tile.
    #[default]
    Normal,
    /// Crosses movement blockers, stopped by walls.
    Flying,
    /// Ignores terrain entirely.
    Intangible,
}

/// How an entity interacts with tiles occupied by other entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollideType {
    /// Blocked by every occupied tile.
    #[default]
    Normal,
    /// The player; may pass through allies depending on configuration.
    Hero,
    /// Skips occupancy checks entirely.
    NoEntity,
}

impl CollideType {
    /// Collide type for an entity, by whether it is the player.
    pub const fn for_entity(is_hero: bool) -> Self {
        if is_hero {
            CollideType::Hero
        } else {
            CollideType::Normal
        }
    }
}

/// What a line check tests each sampled point against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckType {
    /// Stops at the first wall.
    Sight,
    /// Stops at the first point invalid for the given movement type.
    Movement,
}

/// The eight facing directions, numbered as the engine stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    SouthWest = 0,
    West = 1,
    NorthWest = 2,
    North = 3,
    NorthEast = 4,
    East = 5,
    SouthEast = 6,
    South = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
    ];

    /// Direction for a stored index in `0..8`.
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Stored index of this direction.
    pub const fn index(self) -> u8 {
        self as u8
    }
}
