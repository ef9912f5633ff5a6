use crate::{
    ConstantCubeSizing, DatasetName, LinearOrder, ObjectIterBuilder, ObjectNamesBuilder, ObjectSizing,
    PartitionError, SizingConfig,
};

use stripe_blocks_core::{BoundingBox, BoundsError};

/// Partitions the cells of a dataset into objects of roughly `target_object_size` bytes, and hands out iterators that name
/// those objects.
///
/// All of the sizing work happens here, once per cell bounding box, so that naming an object is just a few integer
/// divisions.
///
/// ```
/// use stripe_blocks_core::{BoundingBox, PointN};
/// use stripe_blocks_partition::{Partitioning, RowMajorOrder, SizingConfig};
///
/// let partitioning =
///     Partitioning::with_object_names("ds", SizingConfig::Constant(8), 8 * 64).unwrap();
/// let cells = BoundingBox::new(PointN::from([0, 0]), PointN::from([16, 8])).unwrap();
///
/// let names: Vec<_> = partitioning.iter_objects(&cells, RowMajorOrder).unwrap().collect();
/// assert_eq!(names, ["ds-0-0", "ds-1-0"]);
/// ```
#[derive(Clone, Debug)]
pub struct Partitioning<B = ObjectNamesBuilder> {
    builder: B,
    dataset_name: DatasetName,
    sizing: ConstantCubeSizing,
}

impl Partitioning<ObjectNamesBuilder> {
    /// A `Partitioning` that hands out `ObjectNames` iterators.
    pub fn with_object_names(
        dataset_name: impl Into<DatasetName>,
        cell_size: impl Into<SizingConfig>,
        target_object_size: u64,
    ) -> Result<Self, PartitionError> {
        Self::new(
            ObjectNamesBuilder,
            dataset_name,
            cell_size,
            target_object_size,
        )
    }
}

impl<B> Partitioning<B> {
    /// Validates the sizes eagerly, so a `Partitioning` that exists always yields objects with a side length of at least 1.
    pub fn new(
        builder: B,
        dataset_name: impl Into<DatasetName>,
        cell_size: impl Into<SizingConfig>,
        target_object_size: u64,
    ) -> Result<Self, PartitionError> {
        let sizing = match cell_size.into() {
            SizingConfig::Constant(cell_size) => {
                ConstantCubeSizing::new(cell_size, target_object_size)?
            }
            SizingConfig::PerLocation(_) => return Err(PartitionError::UnsupportedSizing),
        };

        Ok(Self {
            builder,
            dataset_name: dataset_name.into(),
            sizing,
        })
    }

    #[inline]
    pub fn dataset_name(&self) -> &DatasetName {
        &self.dataset_name
    }

    #[inline]
    pub fn cell_size(&self) -> u64 {
        self.sizing.cell_size()
    }

    #[inline]
    pub fn target_object_size(&self) -> u64 {
        self.sizing.target_object_size()
    }

    /// The edge length, in cells, of the hypercube stored in one object of a `dimensions`-dimensional dataset, or `None` for
    /// zero dimensions.
    #[inline]
    pub fn side_len(&self, dimensions: usize) -> Option<i64> {
        self.sizing.side_len(dimensions)
    }

    /// Translates `cell_box` into object space, where each point is one object.
    pub fn object_bounding_box(&self, cell_box: &BoundingBox) -> Result<BoundingBox, PartitionError> {
        let object_box = self.sizing.object_bounding_box(cell_box)?;

        let side_len = self
            .side_len(cell_box.dimensions())
            .ok_or(BoundsError::ZeroDimensions)?;
        tracing::debug!(
            dataset = %self.dataset_name,
            side_len,
            object_shape = ?object_box.shape(),
            "computed object bounding box"
        );
        for (axis, lub) in cell_box.least_upper_bound().iter().enumerate() {
            if lub % side_len != 0 {
                tracing::debug!(
                    dataset = %self.dataset_name,
                    axis,
                    dropped_cells = lub.rem_euclid(side_len),
                    "cells past the last whole object are not addressed"
                );
            }
        }

        Ok(object_box)
    }

    /// Returns the iterator built for the objects covering `cell_box`, enumerated in `order`.
    pub fn iter_objects<O>(
        &self,
        cell_box: &BoundingBox,
        order: O,
    ) -> Result<<B as ObjectIterBuilder<O>>::Iter, PartitionError>
    where
        B: ObjectIterBuilder<O>,
        O: LinearOrder,
    {
        let object_box = self.object_bounding_box(cell_box)?;

        Ok(self
            .builder
            .build(object_box, order, self.dataset_name.clone()))
    }
}

impl<B> ObjectSizing for Partitioning<B> {
    #[inline]
    fn object_bounding_box(&self, cell_box: &BoundingBox) -> Result<BoundingBox, PartitionError> {
        Partitioning::object_bounding_box(self, cell_box)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
