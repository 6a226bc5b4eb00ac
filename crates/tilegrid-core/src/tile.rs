//! Collision tile classes.
//!
//! Every cell of the collision grid holds exactly one [`Tile`]. The numeric
//! codes are what map loaders hand to the engine; the two occupancy codes
//! only ever appear at runtime, laid over cells that were
//! [`Tile::BlocksNone`].

use thiserror::Error;

use crate::geom::Point;

/// Errors produced while decoding tile codes or text fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("unknown tile code {0}")]
    UnknownCode(u16),

    #[error("unknown tile glyph {glyph:?} at {pos}")]
    UnknownGlyph { glyph: char, pos: Point },

    #[error("grid of {expected} tiles expected, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("row {row} is {actual} tiles wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("map has no tiles")]
    EmptyMap,
}

/// A collision tile class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Tile {
    /// Fully open.
    #[default]
    BlocksNone = 0,
    /// Impassable to everything but intangible movement.
    BlocksAll = 1,
    /// Impassable to ground movement, flyable.
    BlocksMovement = 2,
    /// Same as [`Tile::BlocksAll`], drawn differently.
    BlocksAllHidden = 3,
    /// Same as [`Tile::BlocksMovement`], drawn differently.
    BlocksMovementHidden = 4,
    /// Map decoration marker, passable.
    MapOnly = 5,
    MapOnlyAlt = 6,
    /// Occupied by a non-ally entity.
    BlocksEntities = 7,
    /// Occupied by an ally.
    BlocksEnemies = 8,
}

impl Tile {
    /// All tile classes in code order.
    pub const ALL: [Tile; 9] = [
        Tile::BlocksNone,
        Tile::BlocksAll,
        Tile::BlocksMovement,
        Tile::BlocksAllHidden,
        Tile::BlocksMovementHidden,
        Tile::MapOnly,
        Tile::MapOnlyAlt,
        Tile::BlocksEntities,
        Tile::BlocksEnemies,
    ];

    /// Numeric code of this tile.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Blocks sight and flying movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::BlocksAll | Tile::BlocksAllHidden)
    }

    /// Open for ground movement regardless of who asks.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Tile::BlocksNone | Tile::MapOnly | Tile::MapOnlyAlt)
    }

    /// One of the runtime occupancy overlays.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Tile::BlocksEntities | Tile::BlocksEnemies)
    }

    /// Text fixture glyph for this tile.
    pub const fn glyph(self) -> char {
        match self {
            Tile::BlocksNone => '.',
            Tile::BlocksAll => '#',
            Tile::BlocksMovement => '~',
            Tile::BlocksAllHidden => '%',
            Tile::BlocksMovementHidden => '=',
            Tile::MapOnly => 'm',
            Tile::MapOnlyAlt => 'M',
            Tile::BlocksEntities => 'e',
            Tile::BlocksEnemies => 'a',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(c: char) -> Option<Tile> {
        Tile::ALL.into_iter().find(|t| t.glyph() == c)
    }
}

impl TryFrom<u16> for Tile {
    type Error = TileError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Tile::ALL
            .get(code as usize)
            .copied()
            .ok_or(TileError::UnknownCode(code))
    }
}

impl From<Tile> for u16 {
    fn from(t: Tile) -> Self {
        t.code()
    }
}
