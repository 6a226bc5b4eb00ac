use tilegrid_core::Point;

/// Euclidean distance between two tile coordinates.
///
/// Tile centres are offset equally from their corners, so this is also the
/// distance between the two tile centres.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}
