use thiserror::Error;

use tilegrid_core::TileError;

/// Errors raised while loading a collision map.
///
/// Queries never fail with an error: negative answers are ordinary `bool`
/// or `Option` results, and caller contract violations panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("invalid collision grid: {0}")]
    Tile(#[from] TileError),
}

pub type Result<T> = std::result::Result<T, CollisionError>;
