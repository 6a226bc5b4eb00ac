use tilegrid_core::{Point, Range};

/// Marker for "no slot" in a [`SlotIndex`].
pub(crate) const ABSENT: usize = usize::MAX;

/// Dense coordinate → container slot lookup over a map rectangle.
///
/// One `usize` per tile, addressed row-major; coordinates outside the
/// rectangle are always absent.
#[derive(Debug, Clone)]
pub(crate) struct SlotIndex {
    bounds: Range,
    slots: Vec<usize>,
}

impl SlotIndex {
    pub(crate) fn new(bounds: Range) -> Self {
        Self {
            bounds,
            slots: vec![ABSENT; bounds.len()],
        }
    }

    #[inline]
    pub(crate) fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub(crate) fn get(&self, p: Point) -> Option<usize> {
        let i = self.bounds.index(p)?;
        match self.slots[i] {
            ABSENT => None,
            slot => Some(slot),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, p: Point, slot: usize) {
        if let Some(i) = self.bounds.index(p) {
            self.slots[i] = slot;
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self, p: Point) {
        self.set(p, ABSENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_absent() {
        let mut s = SlotIndex::new(Range::with_size(3, 3));
        s.set(Point::new(-1, 0), 4);
        s.set(Point::new(3, 3), 4);
        assert_eq!(s.get(Point::new(-1, 0)), None);
        assert_eq!(s.get(Point::new(3, 3)), None);
    }

    #[test]
    fn set_get_clear() {
        let mut s = SlotIndex::new(Range::with_size(4, 2));
        let p = Point::new(3, 1);
        assert_eq!(s.get(p), None);
        s.set(p, 0);
        assert_eq!(s.get(p), Some(0));
        s.clear(p);
        assert_eq!(s.get(p), None);
    }
}
