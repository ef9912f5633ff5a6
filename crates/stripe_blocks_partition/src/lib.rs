//! Partitioning of N-dimensional lattices into storage objects.
//!
//! A `Partitioning` turns a bounding box of cells into a bounding box of objects, where each object is a hypercube of cells
//! sized close to a target number of bytes. The objects are then enumerated by a `LinearOrder` (usually `RowMajorOrder`),
//! which gives every object a stable linear index and a stable name like `dataset-32-32-64-64`. No storage is touched; the
//! names are meant to be handed to whatever object store holds the data.

pub mod config;
pub mod error;
pub mod object_names;
pub mod order;
pub mod partitioning;
pub mod sizing;

pub use config::PartitioningConfig;
pub use error::PartitionError;
pub use object_names::{DatasetName, ObjectIterBuilder, ObjectNames, ObjectNamesBuilder};
pub use order::{row_major_offset, row_major_order, LinearOrder, RowMajorOrder};
pub use partitioning::Partitioning;
pub use sizing::{CellSizeLookup, ConstantCubeSizing, ObjectSizing, SizingConfig};

pub mod prelude {
    pub use super::{
        DatasetName, LinearOrder, ObjectIterBuilder, ObjectNames, ObjectNamesBuilder, ObjectSizing,
        PartitionError, Partitioning, PartitioningConfig, RowMajorOrder, SizingConfig,
    };
}
