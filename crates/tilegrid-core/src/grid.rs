//! The collision grid: a flat, row-major array of [`Tile`] values.
//!
//! Unlike a view-based grid, [`TileGrid`] owns its cells outright; the
//! collision map is its only writer.

use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::{Tile, TileError};

/// A `width × height` grid of [`Tile`]s addressed by `y * width + x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Tile>,
    bounds: Range,
}

impl TileGrid {
    /// Create a grid filled with [`Tile::BlocksNone`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::BlocksNone)
    }

    /// Create a grid filled with `tile`.
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        let bounds = Range::with_size(width.max(0), height.max(0));
        Self {
            cells: vec![tile; bounds.len()],
            bounds,
        }
    }

    /// Decode a row-major array of numeric tile codes.
    pub fn from_codes(width: i32, height: i32, codes: &[u16]) -> Result<Self, TileError> {
        let bounds = Range::with_size(width.max(0), height.max(0));
        if bounds.len() != codes.len() {
            return Err(TileError::SizeMismatch {
                expected: bounds.len(),
                actual: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .map(|&c| Tile::try_from(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells, bounds })
    }

    /// Parse a text fixture: one glyph per tile, one line per row.
    ///
    /// Leading and trailing blank lines and surrounding whitespace on each
    /// row are ignored. See [`Tile::glyph`] for the alphabet.
    pub fn parse(text: &str) -> Result<Self, TileError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let rows = match rows.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &rows[..=last],
            None => return Err(TileError::EmptyMap),
        };

        let width = rows[0].chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(TileError::Ragged {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or(TileError::UnknownGlyph {
                    glyph,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(tile);
            }
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(width as i32, rows.len() as i32),
        })
    }

    /// Bounding range, always anchored at the origin.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in tiles.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in tiles.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies on the grid.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the tile at `p`. Returns `false` if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(1) as usize;
        for row in self.cells.chunks(w) {
            for t in row {
                write!(f, "{}", t.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
