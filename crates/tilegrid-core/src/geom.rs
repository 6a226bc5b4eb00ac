//! Geometry primitives: tile coordinates ([`Point`]), map rectangles
//! ([`Range`]) and sub-tile positions ([`FPoint`]).
//!
//! Tile `(x, y)` covers the half-open square `[x, x+1) × [y, y+1)` in
//! position space, so a position maps to its tile by flooring both axes.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A tile coordinate. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// All eight neighbours, cardinal and diagonal, clockwise from north.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Centre of this tile in position space.
    #[inline]
    pub fn center(self) -> FPoint {
        FPoint::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }

    /// This tile's corner as a position (no centring).
    #[inline]
    pub fn to_fpoint(self) -> FPoint {
        FPoint::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// FPoint
// ---------------------------------------------------------------------------

/// A sub-tile position in map space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

impl FPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The tile containing this position (floor on both axes).
    #[inline]
    pub fn tile(self) -> Point {
        Point::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: FPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean length of this vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.distance(Self::ZERO)
    }
}

impl From<Point> for FPoint {
    fn from(p: Point) -> Self {
        p.to_fpoint()
    }
}

impl fmt::Display for FPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl Add for FPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range covering a `width × height` map anchored at the origin.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two ranges. Disjoint ranges yield the empty range.
    #[inline]
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Square of tiles within Chebyshev distance `radius` of `center`,
    /// not clipped to any map. Corners saturate at the `i32` limits.
    #[inline]
    pub fn around(center: Point, radius: i32) -> Self {
        let r = radius.max(0);
        Self::new(
            center.x.saturating_sub(r),
            center.y.saturating_sub(r),
            center.x.saturating_add(r).saturating_add(1),
            center.y.saturating_add(r).saturating_add(1),
        )
    }

    /// Flat row-major index of `p`, or `None` if it lies outside.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
    }

    #[test]
    fn fpoint_floors_to_tile() {
        assert_eq!(FPoint::new(2.99, 0.0).tile(), Point::new(2, 0));
        assert_eq!(FPoint::new(-0.25, 1.5).tile(), Point::new(-1, 1));
        assert_eq!(Point::new(4, 7).center(), FPoint::new(4.5, 7.5));
    }

    #[test]
    fn fpoint_distance_is_euclidean() {
        let a = FPoint::new(0.0, 0.0);
        let b = FPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!((b - a).length(), 5.0);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn range_index_round_trip() {
        let r = Range::with_size(7, 4);
        for (i, p) in r.into_iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
        assert_eq!(r.index(Point::new(7, 0)), None);
        assert_eq!(r.index(Point::new(2, 1)), Some(9));
    }

    #[test]
    fn range_around_and_intersect() {
        let sq = Range::around(Point::new(1, 1), 2);
        assert_eq!(sq, Range::new(-1, -1, 4, 4));
        let clipped = sq.intersect(Range::with_size(3, 3));
        assert_eq!(clipped, Range::new(0, 0, 3, 3));
        assert!(Range::new(0, 0, 2, 2).intersect(Range::new(5, 5, 7, 7)).is_empty());
    }

    #[test]
    fn huge_radius_saturates() {
        let sq = Range::around(Point::new(5, 5), i32::MAX);
        assert_eq!(sq.max, Point::new(i32::MAX, i32::MAX));
        assert_eq!(sq.min, Point::new(5 - i32::MAX, 5 - i32::MAX));
        assert_eq!(sq.intersect(Range::with_size(10, 10)), Range::with_size(10, 10));

        let edge = Range::around(Point::new(i32::MIN + 1, 0), 4);
        assert_eq!(edge.min.x, i32::MIN);
    }
}
