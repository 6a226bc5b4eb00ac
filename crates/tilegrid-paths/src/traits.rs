use tilegrid_core::{Point, Range, TileGrid};

/// What a search needs to know about the map it runs on.
pub trait TilePather {
    /// Rectangle of addressable tiles. Searches never leave it.
    fn bounds(&self) -> Range;

    /// Whether a search may step onto `p`.
    fn passable(&self, p: Point) -> bool;
}

/// A bare grid is walkable wherever the tile is empty.
impl TilePather for TileGrid {
    fn bounds(&self) -> Range {
        TileGrid::bounds(self)
    }

    fn passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|t| t.is_empty())
    }
}
