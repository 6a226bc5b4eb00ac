//! The collision map: grid ownership, point classification and the
//! occupancy overlay.

use std::ops::Deref;

use tilegrid_core::{FPoint, Point, Range, Tile, TileGrid};

use crate::config::CollisionConfig;
use crate::error::{CollisionError, Result};
use crate::kinds::{CollideType, MovementType};

/// Collision surface for the currently loaded map.
///
/// Owns the tile grid exclusively; it only changes through
/// [`set_map`](Self::set_map), [`set_grid`](Self::set_grid),
/// [`block`](Self::block) and [`unblock`](Self::unblock). Every query runs
/// synchronously against the current grid.
#[derive(Debug, Clone, Default)]
pub struct MapCollision {
    pub(crate) grid: TileGrid,
    pub(crate) config: CollisionConfig,
}

impl MapCollision {
    /// Create an engine with an empty map. Every point is outside it until
    /// a map is loaded.
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            grid: TileGrid::default(),
            config,
        }
    }

    /// Create an engine around an already decoded grid.
    pub fn with_grid(grid: TileGrid, config: CollisionConfig) -> Self {
        let mut map = Self::new(config);
        map.set_grid(grid);
        map
    }

    /// Load a new collision surface from row-major tile codes, replacing
    /// the previous one. The codes are copied.
    pub fn set_map(&mut self, codes: &[u16], width: i32, height: i32) -> Result<()> {
        if width < 0 || height < 0 {
            return Err(CollisionError::InvalidDimensions { width, height });
        }
        let grid = TileGrid::from_codes(width, height, codes)?;
        self.set_grid(grid);
        Ok(())
    }

    /// Replace the collision surface with `grid`.
    pub fn set_grid(&mut self, grid: TileGrid) {
        log::debug!(
            "collision map loaded: {}x{}, {} walls, {} occupied",
            grid.width(),
            grid.height(),
            grid.count(Tile::BlocksAll) + grid.count(Tile::BlocksAllHidden),
            grid.count(Tile::BlocksEntities) + grid.count(Tile::BlocksEnemies),
        );
        log::trace!("collision grid:\n{grid}");
        self.grid = grid;
    }

    /// Current engine settings.
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replace the engine settings. The grid is left untouched.
    pub fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    /// The collision grid, overlay included.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Map width in tiles.
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Map height in tiles.
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Rectangle of addressable tiles, anchored at the origin.
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    /// Tile at `p`, or `None` outside the map.
    pub fn tile_at(&self, p: Point) -> Option<Tile> {
        self.grid.at(p)
    }

    /// Collide type for an entity, by whether it is the player.
    pub fn collide_type(is_hero: bool) -> CollideType {
        CollideType::for_entity(is_hero)
    }

    // -----------------------------------------------------------------------
    // Point classification
    // -----------------------------------------------------------------------

    /// Whether tile `p` lies off the map.
    #[inline]
    pub fn is_tile_outside_map(&self, p: Point) -> bool {
        !self.grid.contains(p)
    }

    /// Whether the tile under `pos` lies off the map.
    #[inline]
    pub fn is_outside_map(&self, pos: FPoint) -> bool {
        self.is_tile_outside_map(pos.tile())
    }

    /// Whether an entity moving with `movement` and colliding as `collide`
    /// may stand on tile `p`.
    ///
    /// Occupancy is judged before terrain: a normal entity is stopped by
    /// any occupied tile, while the hero passes allies outright unless ally
    /// collision is enabled.
    pub fn is_valid_tile(&self, p: Point, movement: MovementType, collide: CollideType) -> bool {
        let Some(tile) = self.grid.at(p) else {
            return false;
        };

        match collide {
            CollideType::Normal if tile.is_occupied() => return false,
            CollideType::Hero
                if tile == Tile::BlocksEnemies && !self.config.allow_ally_collision =>
            {
                return true;
            }
            _ => {}
        }

        match movement {
            MovementType::Intangible => true,
            MovementType::Flying => !tile.is_wall(),
            MovementType::Normal => tile.is_empty(),
        }
    }

    /// Position variant of [`is_valid_tile`](Self::is_valid_tile).
    /// Negative coordinates are always invalid.
    #[inline]
    pub fn is_valid_position(
        &self,
        pos: FPoint,
        movement: MovementType,
        collide: CollideType,
    ) -> bool {
        if pos.x < 0.0 || pos.y < 0.0 {
            return false;
        }
        self.is_valid_tile(pos.tile(), movement, collide)
    }

    /// Open terrain with no occupant. False outside the map.
    pub fn is_empty(&self, pos: FPoint) -> bool {
        self.grid.at(pos.tile()).is_some_and(Tile::is_empty)
    }

    /// Wall terrain. The map edge counts as a wall.
    pub fn is_wall(&self, pos: FPoint) -> bool {
        self.grid.at(pos.tile()).is_none_or(Tile::is_wall)
    }

    // -----------------------------------------------------------------------
    // Occupancy overlay
    // -----------------------------------------------------------------------

    /// Mark the tile under `pos` as occupied. Only open tiles take the
    /// overlay; terrain is never overwritten.
    pub fn block(&mut self, pos: FPoint, is_ally: bool) {
        let p = pos.tile();
        if self.grid.at(p) == Some(Tile::BlocksNone) {
            let overlay = if is_ally {
                Tile::BlocksEnemies
            } else {
                Tile::BlocksEntities
            };
            self.grid.set(p, overlay);
        }
    }

    /// Clear the occupancy overlay under `pos`, if any.
    pub fn unblock(&mut self, pos: FPoint) {
        let p = pos.tile();
        if self.grid.at(p).is_some_and(Tile::is_occupied) {
            self.grid.set(p, Tile::BlocksNone);
        }
    }

    /// Lift the occupancy overlay on `p` until the returned guard drops.
    pub(crate) fn lift_overlay(&mut self, p: Point) -> LiftedOverlay<'_> {
        let restore = self.grid.at(p).filter(|t| t.is_occupied());
        if restore.is_some() {
            self.grid.set(p, Tile::BlocksNone);
        }
        LiftedOverlay {
            map: self,
            tile: p,
            restore,
        }
    }
}

/// Read access to a map whose target tile has had its occupant lifted.
/// The occupant is put back on drop.
pub(crate) struct LiftedOverlay<'a> {
    map: &'a mut MapCollision,
    tile: Point,
    restore: Option<Tile>,
}

impl Deref for LiftedOverlay<'_> {
    type Target = MapCollision;

    fn deref(&self) -> &MapCollision {
        self.map
    }
}

impl Drop for LiftedOverlay<'_> {
    fn drop(&mut self) {
        if let Some(tile) = self.restore {
            self.map.grid.set(self.tile, tile);
        }
    }
}
