use core::fmt;
use core::ops::{Add, Sub};
use itertools::Itertools;
use num::Integer;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage for point components. Points with up to 4 dimensions never allocate.
pub type Components = SmallVec<[i64; 4]>;

/// An N-dimensional integer point, where N is only known at runtime.
///
/// The same type is used both for absolute lattice coordinates and for per-axis lengths ("shapes"), just like the offsets
/// produced while enumerating a bounding box. It is most convenient to construct points from arrays:
///
/// ```
/// use stripe_blocks_core::PointN;
///
/// let p2 = PointN::from([1, 2]); // 2D
/// let p4 = PointN::from([1, 2, 3, 4]); // 4D
/// assert_eq!(p4.dimensions(), 4);
/// ```
///
/// Points support component-wise addition and subtraction. Both operands must have the same number of dimensions.
///
/// ```
/// use stripe_blocks_core::PointN;
///
/// let p1 = PointN::from([1, 2]);
/// let p2 = PointN::from([3, 4]);
///
/// assert_eq!(&p1 + &p2, PointN::from([4, 6]));
/// assert_eq!(&p1 - &p2, PointN::from([-2, -2]));
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PointN(pub Components);

impl PointN {
    /// A point with `dimensions` components, all equal to `value`.
    #[inline]
    pub fn fill(dimensions: usize, value: i64) -> Self {
        Self(SmallVec::from_elem(value, dimensions))
    }

    /// The origin in `dimensions` dimensions.
    #[inline]
    pub fn zero(dimensions: usize) -> Self {
        Self::fill(dimensions, 0)
    }

    #[inline]
    pub fn from_slice(components: &[i64]) -> Self {
        Self(SmallVec::from_slice(components))
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    /// Returns the component specified by index. Axis 0 is the fastest varying axis in row-major order.
    #[inline]
    pub fn at(&self, component_index: usize) -> i64 {
        self.0[component_index]
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        self.0.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Returns the point after applying `f` component-wise.
    #[inline]
    pub fn map_components_unary(&self, f: impl Fn(i64) -> i64) -> Self {
        self.iter().map(f).collect()
    }

    /// Returns the point after applying `f` component-wise to both `self` and `other` in parallel.
    #[inline]
    pub fn map_components_binary(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        debug_assert_eq!(self.dimensions(), other.dimensions());

        self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect()
    }

    /// Divides every component by `divisor`, rounding toward negative infinity.
    #[inline]
    pub fn div_floor(&self, divisor: i64) -> Self {
        self.map_components_unary(|c| Integer::div_floor(&c, &divisor))
    }

    /// The product of all components, or `None` if it does not fit in a `u64` (or any component is negative).
    #[inline]
    pub fn checked_volume(&self) -> Option<u64> {
        self.iter().try_fold(1u64, |volume, c| {
            u64::try_from(c).ok().and_then(|c| volume.checked_mul(c))
        })
    }
}

impl<const N: usize> From<[i64; N]> for PointN {
    #[inline]
    fn from(components: [i64; N]) -> Self {
        Self::from_slice(&components)
    }
}

impl From<Vec<i64>> for PointN {
    #[inline]
    fn from(components: Vec<i64>) -> Self {
        Self(SmallVec::from_vec(components))
    }
}

impl FromIterator<i64> for PointN {
    #[inline]
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Formats the components joined by `-`, which is the coordinate part of an object name.
impl fmt::Display for PointN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iter().join("-"))
    }
}

impl<'a> Add<&'a PointN> for &'a PointN {
    type Output = PointN;

    #[inline]
    fn add(self, rhs: &'a PointN) -> PointN {
        self.map_components_binary(rhs, |a, b| a + b)
    }
}

impl<'a> Sub<&'a PointN> for &'a PointN {
    type Output = PointN;

    #[inline]
    fn sub(self, rhs: &'a PointN) -> PointN {
        self.map_components_binary(rhs, |a, b| a - b)
    }
}

impl Add for PointN {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for PointN {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
