use crate::LinearOrder;

use core::fmt;
use std::sync::Arc;
use stripe_blocks_core::{BoundingBox, PointN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name of a dataset. It prefixes the name of every object the dataset is partitioned into.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(transparent))]
pub struct DatasetName(Arc<str>);

impl DatasetName {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name of the object at `coords` in object space: `<dataset>-<c0>-<c1>-...-<cN-1>`.
    #[inline]
    pub fn object_name(&self, coords: &PointN) -> String {
        format!("{}-{}", self, coords)
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DatasetName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for DatasetName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// An object that knows how to construct the iterator a `Partitioning` hands out for an object-space bounding box.
pub trait ObjectIterBuilder<O> {
    type Iter;

    fn build(&self, object_box: BoundingBox, order: O, dataset_name: DatasetName) -> Self::Iter;
}

/// Builds `ObjectNames` iterators.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObjectNamesBuilder;

impl<O> ObjectIterBuilder<O> for ObjectNamesBuilder
where
    O: LinearOrder,
{
    type Iter = ObjectNames<O>;

    #[inline]
    fn build(&self, object_box: BoundingBox, order: O, dataset_name: DatasetName) -> Self::Iter {
        ObjectNames::new(object_box, order, dataset_name)
    }
}

/// A restartable cursor over the objects of an object-space bounding box, yielding one object name per object in the order
/// given by `O`.
///
/// Once the order runs past the box, `next` keeps returning `None` without moving the cursor, until `reset` rewinds it.
///
/// ```
/// use stripe_blocks_core::{BoundingBox, PointN};
/// use stripe_blocks_partition::{ObjectNames, RowMajorOrder};
///
/// let objects = BoundingBox::new(PointN::from([0, 0]), PointN::from([2, 2])).unwrap();
/// let mut names = ObjectNames::new(objects, RowMajorOrder, "ds");
///
/// assert_eq!(names.next().as_deref(), Some("ds-0-0"));
/// assert_eq!(names.next().as_deref(), Some("ds-1-0"));
///
/// names.reset();
/// assert_eq!(names.collect::<Vec<_>>(), ["ds-0-0", "ds-1-0", "ds-0-1", "ds-1-1"]);
/// ```
#[derive(Clone, Debug)]
pub struct ObjectNames<O> {
    object_box: BoundingBox,
    order: O,
    dataset_name: DatasetName,
    lin_pos: u64,
    exhausted: bool,
}

impl<O> ObjectNames<O>
where
    O: LinearOrder,
{
    pub fn new(object_box: BoundingBox, order: O, dataset_name: impl Into<DatasetName>) -> Self {
        Self {
            object_box,
            order,
            dataset_name: dataset_name.into(),
            lin_pos: 0,
            exhausted: false,
        }
    }

    /// Like `next`, but yields the object-space coordinates instead of the formatted name.
    pub fn next_coords(&mut self) -> Option<PointN> {
        match self.order.coords_at(&self.object_box, self.lin_pos) {
            Some(coords) => {
                self.lin_pos += 1;
                Some(coords)
            }
            None => {
                if !self.exhausted {
                    tracing::trace!(
                        dataset = %self.dataset_name,
                        num_objects = self.lin_pos,
                        "object names exhausted"
                    );
                    self.exhausted = true;
                }
                None
            }
        }
    }

    /// Rewinds the cursor to the first object. This is valid at any time, including after exhaustion.
    pub fn reset(&mut self) {
        tracing::trace!(dataset = %self.dataset_name, position = self.lin_pos, "object names reset");
        self.lin_pos = 0;
        self.exhausted = false;
    }
}

impl<O> ObjectNames<O> {
    /// The linear index of the object that the next call to `next` will yield.
    #[inline]
    pub fn position(&self) -> u64 {
        self.lin_pos
    }

    /// Returns `true` iff the last call to `next` found no more objects.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub fn object_bounding_box(&self) -> &BoundingBox {
        &self.object_box
    }

    #[inline]
    pub fn dataset_name(&self) -> &DatasetName {
        &self.dataset_name
    }
}

impl<O> Iterator for ObjectNames<O>
where
    O: LinearOrder,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<String> {
        self.next_coords()
            .map(|coords| self.dataset_name.object_name(&coords))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // No position of a box with an unindexable volume is ever yielded.
        let remaining = self
            .object_box
            .volume()
            .map_or(0, |volume| volume.saturating_sub(self.lin_pos));

        exact_size_hint(remaining)
    }
}

fn exact_size_hint(remaining: u64) -> (usize, Option<usize>) {
    match usize::try_from(remaining) {
        Ok(remaining) => (remaining, Some(remaining)),
        Err(_) => (usize::MAX, None),
    }
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

    use crate::RowMajorOrder;

    fn names_over(min: [i64; 2], lub: [i64; 2]) -> ObjectNames<RowMajorOrder> {
        let object_box = BoundingBox::new(PointN::from(min), PointN::from(lub)).unwrap();

        ObjectNames::new(object_box, RowMajorOrder, "someDatasetName")
    }

    #[test]
    fn names_every_object_in_row_major_order() {
        let names: Vec<_> = names_over([0, 0], [4, 2]).collect();

        assert_eq!(
            names,
            vec![
                "someDatasetName-0-0",
                "someDatasetName-1-0",
                "someDatasetName-2-0",
                "someDatasetName-3-0",
                "someDatasetName-0-1",
                "someDatasetName-1-1",
                "someDatasetName-2-1",
                "someDatasetName-3-1",
            ]
        );
    }

    #[test]
    fn names_use_absolute_coordinates() {
        let mut names = names_over([-1, 10], [1, 11]);

        assert_eq!(names.next().as_deref(), Some("someDatasetName--1-10"));
        assert_eq!(names.next().as_deref(), Some("someDatasetName-0-10"));
        assert_eq!(names.next(), None);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut names = names_over([0, 0], [2, 1]);
        assert_eq!(names.by_ref().count(), 2);
        assert!(names.is_exhausted());
        assert_eq!(names.position(), 2);

        for _ in 0..5 {
            assert_eq!(names.next(), None);
            assert_eq!(names.position(), 2);
            assert!(names.is_exhausted());
        }
    }

    #[test]
    fn reset_restarts_from_first_object() {
        let fresh_first = names_over([3, 4], [6, 8]).next();

        let mut names = names_over([3, 4], [6, 8]);
        names.nth(4);
        names.reset();
        assert_eq!(names.position(), 0);
        assert_eq!(names.next(), fresh_first);

        names.by_ref().for_each(drop);
        assert!(names.is_exhausted());
        names.reset();
        assert!(!names.is_exhausted());
        assert_eq!(names.next(), fresh_first);
    }

    #[test]
    fn next_coords_advances_the_same_cursor() {
        let mut names = names_over([0, 0], [2, 2]);

        assert_eq!(names.next_coords(), Some(PointN::from([0, 0])));
        assert_eq!(names.next().as_deref(), Some("someDatasetName-1-0"));
        assert_eq!(names.next_coords(), Some(PointN::from([0, 1])));
        assert_eq!(names.position(), 3);
    }

    #[test]
    fn size_hint_counts_remaining_objects() {
        let mut names = names_over([0, 0], [4, 2]);
        assert_eq!(names.size_hint(), (8, Some(8)));

        names.nth(2);
        assert_eq!(names.size_hint(), (5, Some(5)));

        names.by_ref().for_each(drop);
        assert_eq!(names.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hint_has_no_upper_bound_past_usize() {
        assert_eq!(exact_size_hint(7), (7, Some(7)));

        if let Some(past_usize) = (usize::MAX as u64).checked_add(1) {
            assert_eq!(exact_size_hint(past_usize), (usize::MAX, None));
        }
    }

    #[test]
    fn unindexable_object_box_yields_nothing() {
        let object_box = BoundingBox::new(PointN::zero(4), PointN::fill(4, 1 << 16)).unwrap();
        let mut names = ObjectNames::new(object_box, RowMajorOrder, "ds");

        assert_eq!(names.size_hint(), (0, Some(0)));
        assert_eq!(names.next(), None);
        assert!(names.is_exhausted());
    }

    #[test]
    fn empty_object_box_yields_nothing() {
        let mut names = names_over([0, 0], [0, 5]);

        assert_eq!(names.next(), None);
        assert!(names.is_exhausted());
        assert_eq!(names.position(), 0);
    }

    #[test]
    fn builder_constructs_fresh_iterator() {
        let object_box = BoundingBox::new(PointN::from([1]), PointN::from([3])).unwrap();

        let names: Vec<_> = ObjectNamesBuilder
            .build(object_box, RowMajorOrder, DatasetName::from("ds"))
            .collect();

        assert_eq!(names, vec!["ds-1", "ds-2"]);
    }

    #[test]
    fn object_name_format() {
        let name = DatasetName::from(String::from("cube"));

        assert_eq!(name.object_name(&PointN::from([32, 32, 64, 64])), "cube-32-32-64-64");
        assert_eq!(name.as_str(), "cube");
    }
}
