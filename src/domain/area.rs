// ============================================================================
// Area
// Start/end point pairs describing destination, source and mask regions
// ============================================================================

use super::point::{DstPoint, Point};
use crate::numeric::Fixed32;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned region from `start` (inclusive) to `end` (exclusive).
///
/// There is no ordering requirement between `start` and `end`: an axis where
/// `start > end` is walked in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Area<T, const N: usize> {
    pub start: Point<T, N>,
    pub end: Point<T, N>,
}

/// Destination region in integer coordinates.
pub type DstArea<const N: usize> = Area<i32, N>;

/// Source region in fixed-point coordinates.
pub type SrcArea<const N: usize> = Area<Fixed32, N>;

/// Destination-space region that bounds which coordinates get visited.
pub type Mask<const N: usize> = Area<i32, N>;

impl<T: Copy + PartialOrd, const N: usize> Area<T, N> {
    pub fn new(start: [T; N], end: [T; N]) -> Self {
        Self::from_points(Point(start), Point(end))
    }

    pub const fn from_points(start: Point<T, N>, end: Point<T, N>) -> Self {
        Self { start, end }
    }

    /// Whether `axis` runs from a higher start to a lower end.
    #[inline]
    pub fn is_reversed(&self, axis: usize) -> bool {
        self.start[axis] > self.end[axis]
    }

    /// Whether any axis has zero extent.
    pub fn is_degenerate(&self) -> bool {
        (0..N).any(|axis| self.start[axis] == self.end[axis])
    }

    /// Exchange start and end on one axis.
    #[inline]
    pub fn swap_axis(&mut self, axis: usize) {
        std::mem::swap(&mut self.start[axis], &mut self.end[axis]);
    }

    /// The same region with `start <= end` on every axis.
    pub fn normalized(mut self) -> Self {
        for axis in 0..N {
            if self.is_reversed(axis) {
                self.swap_axis(axis);
            }
        }
        self
    }
}

impl<const N: usize> Area<Fixed32, N> {
    /// Build a source area from whole-number corners.
    pub fn from_ints(start: [i32; N], end: [i32; N]) -> Self {
        Self::new(start.map(Fixed32::from_int), end.map(Fixed32::from_int))
    }
}

impl<const N: usize> Area<i32, N> {
    /// Number of unit steps along `axis`, regardless of direction.
    #[inline]
    pub fn extent(&self, axis: usize) -> u32 {
        self.start[axis].abs_diff(self.end[axis])
    }

    /// Number of integer coordinates inside the area, saturating at
    /// `u64::MAX`.
    pub fn volume(&self) -> u64 {
        (0..N).fold(1u64, |acc, axis| acc.saturating_mul(u64::from(self.extent(axis))))
    }

    /// Whether `point` lies inside the half-open area.
    pub fn contains(&self, point: &DstPoint<N>) -> bool {
        let area = self.normalized();
        (0..N).all(|axis| area.start[axis] <= point[axis] && point[axis] < area.end[axis])
    }

    /// The overlap of two areas, normalized. Axes that do not overlap come
    /// back with zero extent.
    pub fn intersect(&self, other: &Self) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        let mut out = a;
        for axis in 0..N {
            out.start[axis] = a.start[axis].max(b.start[axis]);
            out.end[axis] = a.end[axis].min(b.end[axis]).max(out.start[axis]);
        }
        out
    }

    /// Split the area into `count` disjoint, contiguous masks along `axis`.
    ///
    /// The bands cover the normalized area exactly. When `count` exceeds the
    /// extent some bands are empty.
    ///
    /// # Panics
    /// Panics if `axis >= N`.
    pub fn bands(&self, axis: usize, count: usize) -> Bands<N> {
        assert!(axis < N, "axis {} out of range for {} dimensions", axis, N);
        Bands {
            area: self.normalized(),
            axis,
            count,
            next: 0,
        }
    }
}

/// Iterator returned by [`Area::bands`].
#[derive(Debug, Clone)]
pub struct Bands<const N: usize> {
    area: Mask<N>,
    axis: usize,
    count: usize,
    next: usize,
}

impl<const N: usize> Bands<N> {
    fn boundary(&self, index: usize) -> i32 {
        let lo = i64::from(self.area.start[self.axis]);
        let extent = i64::from(self.area.extent(self.axis));
        // Lies between start and end, so it fits back into i32
        (lo + extent * index as i64 / self.count as i64) as i32
    }
}

impl<const N: usize> Iterator for Bands<N> {
    type Item = Mask<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let mut band = self.area;
        band.start[self.axis] = self.boundary(self.next);
        band.end[self.axis] = self.boundary(self.next + 1);
        self.next += 1;
        Some(band)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Bands<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_and_normalized() {
        let area = DstArea::new([10, 0], [0, 5]);
        assert!(area.is_reversed(0));
        assert!(!area.is_reversed(1));

        let norm = area.normalized();
        assert_eq!(norm, DstArea::new([0, 0], [10, 5]));
        assert!(!norm.is_reversed(0));
    }

    #[test]
    fn test_degenerate() {
        assert!(DstArea::new([3, 0], [3, 5]).is_degenerate());
        assert!(!DstArea::new([3, 0], [4, 5]).is_degenerate());
        assert!(SrcArea::from_ints([1], [1]).is_degenerate());
    }

    #[test]
    fn test_extent_and_volume() {
        let area = DstArea::new([10, -2, 0], [0, 2, 3]);
        assert_eq!(area.extent(0), 10);
        assert_eq!(area.extent(1), 4);
        assert_eq!(area.volume(), 120);
        assert_eq!(DstArea::new([0], [0]).volume(), 0);
    }

    #[test]
    fn test_volume_saturates() {
        let huge = DstArea::new([0; 3], [1 << 30; 3]);
        assert_eq!(huge.volume(), u64::MAX);

        let flat = DstArea::new([0, 0, 0, 0], [1 << 30, 1 << 30, 1 << 30, 0]);
        assert_eq!(flat.volume(), 0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let area = DstArea::new([5, 0], [0, 3]);
        assert!(area.contains(&Point([0, 0])));
        assert!(area.contains(&Point([4, 2])));
        assert!(!area.contains(&Point([5, 2])));
        assert!(!area.contains(&Point([4, 3])));
        assert!(!area.contains(&Point([-1, 0])));
    }

    #[test]
    fn test_intersect() {
        let a = DstArea::new([0, 0], [10, 10]);
        let b = DstArea::new([15, 5], [5, 20]);
        assert_eq!(a.intersect(&b), DstArea::new([5, 5], [10, 10]));

        let disjoint = DstArea::new([20, 0], [30, 10]);
        let empty = a.intersect(&disjoint);
        assert_eq!(empty.extent(0), 0);
        assert_eq!(empty.volume(), 0);
    }

    #[test]
    fn test_from_ints() {
        let src = SrcArea::from_ints([0, 4], [10, 2]);
        assert_eq!(src.start[1], Fixed32::from_int(4));
        assert!(src.is_reversed(1));
    }

    #[test]
    fn test_bands_cover_area() {
        let area = DstArea::new([0, 10], [7, 0]);
        let bands: Vec<_> = area.bands(1, 3).collect();
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[0], DstArea::new([0, 0], [7, 3]));
        assert_eq!(bands[1], DstArea::new([0, 3], [7, 6]));
        assert_eq!(bands[2], DstArea::new([0, 6], [7, 10]));

        let total: u64 = bands.iter().map(|b| b.volume()).sum();
        assert_eq!(total, area.volume());
    }

    #[test]
    fn test_bands_more_than_extent() {
        let area = DstArea::new([0], [2]);
        let bands: Vec<_> = area.bands(0, 4).collect();
        assert_eq!(bands.len(), 4);
        assert_eq!(bands.iter().map(|b| b.volume()).sum::<u64>(), 2);
        assert_eq!(area.bands(0, 0).count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_bands_axis_out_of_range() {
        let _ = DstArea::new([0], [2]).bands(1, 2);
    }
}
