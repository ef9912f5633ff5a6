use crate::PointN;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a pair of corners does not describe a valid `BoundingBox`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoundsError {
    #[error("bounding box corners have mismatched dimensions: minimum has {minimum}, least upper bound has {least_upper_bound}")]
    MismatchedDimensions {
        minimum: usize,
        least_upper_bound: usize,
    },
    #[error("bounding box must have at least one dimension")]
    ZeroDimensions,
    #[error("bounding box minimum {minimum} is greater than least upper bound {least_upper_bound} on axis {axis}")]
    InvertedAxis {
        axis: usize,
        minimum: i64,
        least_upper_bound: i64,
    },
    #[error("bounding box length on axis {axis} does not fit in 64 bits")]
    ExtentOverflow { axis: usize },
    #[error("bounding box can only be scaled by a positive divisor, got {0}")]
    NonPositiveDivisor(i64),
}

/// An N-dimensional bounding box. This is mathematically the Cartesian product of a half-closed interval `[a, b)` in each
/// dimension: the `minimum` is contained in the box, the `least_upper_bound` is not.
///
/// The corners are validated on construction, so every `BoundingBox` has at least one dimension, corners of equal
/// dimensions, and `minimum <= least_upper_bound` on every axis. The length of each axis fits in an `i64`, but the volume
/// may not fit in a `u64`; `volume` returns `None` for such boxes.
///
/// ```
/// use stripe_blocks_core::{BoundingBox, PointN};
///
/// let bbox = BoundingBox::new(PointN::from([0, 0]), PointN::from([4, 2])).unwrap();
/// assert_eq!(bbox.shape(), PointN::from([4, 2]));
/// assert_eq!(bbox.volume(), Some(8));
/// assert!(bbox.contains(&PointN::from([3, 1])));
/// assert!(!bbox.contains(&PointN::from([4, 1])));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(try_from = "(PointN, PointN)", into = "(PointN, PointN)")
)]
pub struct BoundingBox {
    minimum: PointN,
    least_upper_bound: PointN,
}

impl BoundingBox {
    /// Constructs the box `[minimum, least_upper_bound)`.
    pub fn new(minimum: PointN, least_upper_bound: PointN) -> Result<Self, BoundsError> {
        if minimum.dimensions() != least_upper_bound.dimensions() {
            return Err(BoundsError::MismatchedDimensions {
                minimum: minimum.dimensions(),
                least_upper_bound: least_upper_bound.dimensions(),
            });
        }
        if minimum.dimensions() == 0 {
            return Err(BoundsError::ZeroDimensions);
        }

        for (axis, (min, lub)) in minimum.iter().zip(least_upper_bound.iter()).enumerate() {
            if min > lub {
                return Err(BoundsError::InvertedAxis {
                    axis,
                    minimum: min,
                    least_upper_bound: lub,
                });
            }
            if lub.checked_sub(min).is_none() {
                return Err(BoundsError::ExtentOverflow { axis });
            }
        }

        Ok(Self {
            minimum,
            least_upper_bound,
        })
    }

    /// An alternative representation of a box as the minimum point and the length of each dimension.
    pub fn from_min_and_shape(minimum: PointN, shape: PointN) -> Result<Self, BoundsError> {
        if minimum.dimensions() != shape.dimensions() {
            return Err(BoundsError::MismatchedDimensions {
                minimum: minimum.dimensions(),
                least_upper_bound: shape.dimensions(),
            });
        }
        let least_upper_bound = minimum
            .iter()
            .zip(shape.iter())
            .enumerate()
            .map(|(axis, (m, s))| m.checked_add(s).ok_or(BoundsError::ExtentOverflow { axis }))
            .collect::<Result<PointN, _>>()?;

        Self::new(minimum, least_upper_bound)
    }

    /// The least point contained in the box.
    #[inline]
    pub fn minimum(&self) -> &PointN {
        &self.minimum
    }

    /// The least point `p` for which all points `q` in the box satisfy `q < p`.
    #[inline]
    pub fn least_upper_bound(&self) -> &PointN {
        &self.least_upper_bound
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.minimum.dimensions()
    }

    /// The length of each dimension, i.e. the extent `least_upper_bound - minimum`.
    #[inline]
    pub fn shape(&self) -> PointN {
        &self.least_upper_bound - &self.minimum
    }

    /// The number of points contained in the box, or `None` if that does not fit in a `u64`.
    #[inline]
    pub fn volume(&self) -> Option<u64> {
        self.shape().checked_volume()
    }

    /// Returns `true` iff the box contains no points, i.e. some dimension has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.minimum
            .iter()
            .zip(self.least_upper_bound.iter())
            .any(|(min, lub)| min == lub)
    }

    /// Returns `true` iff the point `p` is contained in this box.
    #[inline]
    pub fn contains(&self, p: &PointN) -> bool {
        p.dimensions() == self.dimensions()
            && self
                .minimum
                .iter()
                .zip(self.least_upper_bound.iter())
                .zip(p.iter())
                .all(|((min, lub), c)| min <= c && c < lub)
    }

    /// Equivalent to `scale_bounding_box(self, divisor)`.
    #[inline]
    pub fn scaled_down(&self, divisor: i64) -> Result<Self, BoundsError> {
        scale_bounding_box(self, divisor)
    }
}

impl TryFrom<(PointN, PointN)> for BoundingBox {
    type Error = BoundsError;

    fn try_from((minimum, least_upper_bound): (PointN, PointN)) -> Result<Self, Self::Error> {
        Self::new(minimum, least_upper_bound)
    }
}

impl From<BoundingBox> for (PointN, PointN) {
    fn from(bbox: BoundingBox) -> Self {
        (bbox.minimum, bbox.least_upper_bound)
    }
}

/// Divides both corners of `bbox` by `divisor`, rounding each component toward negative infinity.
///
/// This maps a box in cell space onto the box of `divisor`-edged hypercubes in object space. A minimum that is not a multiple
/// of `divisor` lands in a partially covered object. Cells between the last whole multiple of `divisor` and the least upper
/// bound are not covered by the result.
pub fn scale_bounding_box(bbox: &BoundingBox, divisor: i64) -> Result<BoundingBox, BoundsError> {
    if divisor <= 0 {
        return Err(BoundsError::NonPositiveDivisor(divisor));
    }

    BoundingBox::new(
        bbox.minimum.div_floor(divisor),
        bbox.least_upper_bound.div_floor(divisor),
    )
}

/// Returns `true` iff `offset` lies outside of a box with shape `extent` on any axis.
///
/// `offset` is relative to the box's minimum, so this is `minimum + offset >= least_upper_bound` without leaving the
/// offset frame. Negative offsets are not checked; they never come out of a linear order.
#[inline]
pub fn is_out_of_range(extent: &PointN, offset: &PointN) -> bool {
    debug_assert_eq!(extent.dimensions(), offset.dimensions());

    extent.iter().zip(offset.iter()).any(|(e, o)| o >= e)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_mismatched_dimensions() {
        let result = BoundingBox::new(PointN::from([0, 0]), PointN::from([1, 1, 1]));

        assert_eq!(
            result,
            Err(BoundsError::MismatchedDimensions {
                minimum: 2,
                least_upper_bound: 3
            })
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        let result = BoundingBox::new(PointN::zero(0), PointN::zero(0));

        assert_eq!(result, Err(BoundsError::ZeroDimensions));
    }

    #[test]
    fn rejects_inverted_axis() {
        let result = BoundingBox::new(PointN::from([0, 5, 0]), PointN::from([1, 4, 1]));

        assert_eq!(
            result,
            Err(BoundsError::InvertedAxis {
                axis: 1,
                minimum: 5,
                least_upper_bound: 4
            })
        );
    }

    #[test]
    fn rejects_axis_length_overflow() {
        let result = BoundingBox::new(PointN::from([0, i64::MIN]), PointN::from([1, i64::MAX]));

        assert_eq!(result, Err(BoundsError::ExtentOverflow { axis: 1 }));
    }

    #[test]
    fn volume_may_exceed_64_bits() {
        let bbox = BoundingBox::new(PointN::zero(4), PointN::fill(4, 1 << 16)).unwrap();

        assert_eq!(bbox.volume(), None);
        assert!(!bbox.is_empty());
        assert_eq!(bbox.shape(), PointN::fill(4, 1 << 16));

        let bbox = BoundingBox::new(PointN::zero(4), PointN::from([1 << 16, 1 << 16, 1 << 16, 0])).unwrap();
        assert_eq!(bbox.volume(), Some(0));
        assert!(bbox.is_empty());
    }

    #[test]
    fn zero_length_axis_is_empty() {
        let bbox = BoundingBox::new(PointN::from([3, 3]), PointN::from([3, 9])).unwrap();

        assert!(bbox.is_empty());
        assert!(!bbox.contains(&PointN::from([3, 3])));
    }

    #[test]
    fn from_min_and_shape_matches_new() {
        let a = BoundingBox::from_min_and_shape(PointN::from([-2, 1]), PointN::from([4, 2])).unwrap();
        let b = BoundingBox::new(PointN::from([-2, 1]), PointN::from([2, 3])).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.shape(), PointN::from([4, 2]));
    }

    #[test]
    fn contains_is_half_open() {
        let bbox = BoundingBox::new(PointN::from([-1, -1]), PointN::from([1, 1])).unwrap();

        assert!(bbox.contains(&PointN::from([-1, -1])));
        assert!(bbox.contains(&PointN::from([0, 0])));
        assert!(!bbox.contains(&PointN::from([1, 0])));
        assert!(!bbox.contains(&PointN::from([0, -2])));
        assert!(!bbox.contains(&PointN::from([0, 0, 0])));
    }

    #[test]
    fn scale_divides_both_corners() {
        let cells = BoundingBox::new(
            PointN::from([1024, 1024, 2048, 2048]),
            PointN::from([3072, 4096, 5120, 6144]),
        )
        .unwrap();

        let objects = scale_bounding_box(&cells, 32).unwrap();

        assert_eq!(objects.minimum(), &PointN::from([32, 32, 64, 64]));
        assert_eq!(objects.least_upper_bound(), &PointN::from([96, 128, 160, 192]));
        assert_eq!(objects.shape(), PointN::from([64, 96, 96, 128]));
    }

    #[test]
    fn scale_floors_negative_corners() {
        let cells = BoundingBox::new(PointN::from([-5, 0]), PointN::from([7, 3])).unwrap();

        let objects = cells.scaled_down(4).unwrap();

        assert_eq!(objects.minimum(), &PointN::from([-2, 0]));
        assert_eq!(objects.least_upper_bound(), &PointN::from([1, 0]));
        assert!(objects.is_empty());
    }

    #[test]
    fn scale_rejects_non_positive_divisor() {
        let cells = BoundingBox::new(PointN::from([0]), PointN::from([8])).unwrap();

        assert_eq!(
            scale_bounding_box(&cells, 0),
            Err(BoundsError::NonPositiveDivisor(0))
        );
        assert_eq!(
            scale_bounding_box(&cells, -2),
            Err(BoundsError::NonPositiveDivisor(-2))
        );
    }

    #[test]
    fn out_of_range_compares_offsets_with_extent() {
        let extent = PointN::from([4, 2]);

        assert!(!is_out_of_range(&extent, &PointN::from([0, 0])));
        assert!(!is_out_of_range(&extent, &PointN::from([3, 1])));
        assert!(is_out_of_range(&extent, &PointN::from([4, 0])));
        assert!(is_out_of_range(&extent, &PointN::from([0, 2])));
    }

    #[test]
    fn out_of_range_ignores_box_minimum() {
        // A box at ((10, 10), (14, 12)) has the same extent as one at the origin, so the same offsets are in range.
        let bbox = BoundingBox::new(PointN::from([10, 10]), PointN::from([14, 12])).unwrap();

        assert!(!is_out_of_range(&bbox.shape(), &PointN::from([3, 1])));
        assert!(is_out_of_range(&bbox.shape(), &PointN::from([0, 2])));
    }
}
