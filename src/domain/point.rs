// ============================================================================
// Point
// Fixed-length coordinate tuple
// ============================================================================

use crate::numeric::Fixed32;
use std::ops::{Index, IndexMut};

/// An `N`-dimensional coordinate. Axis 0 is the innermost (fastest varying)
/// axis during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T, const N: usize>(pub [T; N]);

/// Integer destination coordinate.
pub type DstPoint<const N: usize> = Point<i32, N>;

/// Fixed-point source coordinate.
pub type SrcPoint<const N: usize> = Point<Fixed32, N>;

impl<T: Copy, const N: usize> Point<T, N> {
    pub const fn new(coords: [T; N]) -> Self {
        Self(coords)
    }

    /// A point with every coordinate set to `value`.
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Number of dimensions.
    pub const fn dimensions(&self) -> usize {
        N
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Apply `f` to every coordinate.
    pub fn map<U: Copy>(self, f: impl FnMut(T) -> U) -> Point<U, N> {
        Point(self.0.map(f))
    }
}

impl<const N: usize> SrcPoint<N> {
    /// Truncate every coordinate toward negative infinity.
    pub fn to_int(self) -> DstPoint<N> {
        self.map(Fixed32::to_int)
    }
}

impl<T: Copy + Default, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self(coords)
    }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, axis: usize) -> &T {
        &self.0[axis]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut T {
        &mut self.0[axis]
    }
}

// Arrays of arbitrary `N` have no derived serde impls, so go through a
// sequence and check the length on the way back in.
#[cfg(feature = "serde")]
mod serde_impl {
    use super::Point;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize, const N: usize> Serialize for Point<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.0.iter())
        }
    }

    impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Point<T, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let coords = Vec::<T>::deserialize(deserializer)?;
            let len = coords.len();
            let coords: [T; N] = coords
                .try_into()
                .map_err(|_| D::Error::invalid_length(len, &"one coordinate per dimension"))?;
            Ok(Point(coords))
        }
    }
}
