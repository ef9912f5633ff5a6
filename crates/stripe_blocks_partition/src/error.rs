use stripe_blocks_core::{BoundsError, PointN};

use thiserror::Error;

/// Invalid input to a `Partitioning`. These are always raised on construction or while deriving an object bounding box,
/// never while iterating.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PartitionError {
    #[error("cell size must be a positive number of bytes")]
    NonPositiveCellSize,
    #[error("target object size must be a positive number of bytes")]
    NonPositiveTargetObjectSize,
    #[error("target object size ({target_object_size} bytes) is smaller than a single cell ({cell_size} bytes)")]
    ObjectSmallerThanCell {
        cell_size: u64,
        target_object_size: u64,
    },
    #[error("per-location cell sizes are not supported yet")]
    UnsupportedSizing,
    #[error("cell bounding box with shape {cell_shape:?} does not span a whole object of side length {side_len}")]
    EmptyObjectBoundingBox { cell_shape: PointN, side_len: i64 },
    #[error("object bounding box with shape {object_shape:?} holds more than 2^64 objects")]
    TooManyObjects { object_shape: PointN },
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
