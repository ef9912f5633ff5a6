//! Linear orders impose a total order on the points of a bounding box, so that a single non-negative index names every point
//! exactly once.

use stripe_blocks_core::{is_out_of_range, BoundingBox, PointN};

/// Maps a linear index to a point of a bounding box.
///
/// Implementations must be a bijection between `0..volume` and the points of `bbox`, and must return `None` for every
/// `pos >= volume`. `ObjectNames` relies on this to terminate. A box whose volume does not fit in a `u64` cannot be indexed
/// by a `u64`, so implementations return `None` for every `pos` of such a box.
pub trait LinearOrder {
    fn coords_at(&self, bbox: &BoundingBox, pos: u64) -> Option<PointN>;
}

impl<T> LinearOrder for &T
where
    T: LinearOrder + ?Sized,
{
    #[inline]
    fn coords_at(&self, bbox: &BoundingBox, pos: u64) -> Option<PointN> {
        (**self).coords_at(bbox, pos)
    }
}

/// Row-major order in any number of dimensions: axis 0 varies fastest and the last axis varies slowest.
///
/// ```
/// use stripe_blocks_core::{BoundingBox, PointN};
/// use stripe_blocks_partition::{LinearOrder, RowMajorOrder};
///
/// let bbox = BoundingBox::new(PointN::from([0, 0]), PointN::from([4, 2])).unwrap();
///
/// assert_eq!(RowMajorOrder.coords_at(&bbox, 5), Some(PointN::from([1, 1])));
/// assert_eq!(RowMajorOrder.coords_at(&bbox, 8), None);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RowMajorOrder;

impl LinearOrder for RowMajorOrder {
    #[inline]
    fn coords_at(&self, bbox: &BoundingBox, pos: u64) -> Option<PointN> {
        row_major_order(bbox, pos)
    }
}

/// Returns the point at linear index `pos` of `bbox` in row-major order, or `None` once `pos` runs past the volume.
pub fn row_major_order(bbox: &BoundingBox, pos: u64) -> Option<PointN> {
    // The partial products in `row_major_offset` are bounded by the volume.
    let volume = bbox.volume()?;
    if volume == 0 {
        return None;
    }

    let shape = bbox.shape();
    let offset = row_major_offset(&shape, pos);
    if is_out_of_range(&shape, &offset) {
        return None;
    }

    Some(bbox.minimum() + &offset)
}

/// Decomposes `pos` into an offset inside a box of `shape`. Every component of `shape` must be positive, and their product
/// must fit in a `u64`.
///
/// `modulus` is the product of the lengths up to and including the current axis, `div` the product of the lengths strictly
/// before it. The last axis takes whatever is left of `pos`, so a `pos` past the volume shows up as an out-of-range last
/// component.
pub fn row_major_offset(shape: &PointN, pos: u64) -> PointN {
    let last_axis = shape.dimensions() - 1;
    let mut modulus = 1u64;
    let mut div = 1u64;

    shape
        .iter()
        .enumerate()
        .map(|(axis, length)| {
            debug_assert!(length > 0);
            let length = length as u64;

            let c = if axis == last_axis {
                pos / div
            } else {
                modulus *= length;
                let c = (pos % modulus) / div;
                div *= length;
                c
            };

            i64::try_from(c).unwrap_or(i64::MAX)
        })
        .collect()
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
