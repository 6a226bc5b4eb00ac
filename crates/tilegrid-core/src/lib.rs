//! Foundational types for the tile-grid collision engine.
//!
//! This crate provides tile coordinates and sub-tile positions, the nine
//! collision tile classes, and the owned collision grid that map loaders
//! hand to the engine.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{FPoint, Point, Range};
pub use grid::TileGrid;
pub use tile::{Tile, TileError};
