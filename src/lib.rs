//! Partitioning of large N-dimensional lattice datasets into storage objects of a target size, with a cheap and
//! reproducible mapping from object index to object name.
//!
//! This library is organized into two crates:
//! - **core**: lattice point and bounding box data types, and their arithmetic
//! - **partition**: linear orders, object sizing, and the `Partitioning` that names objects
//!
//! ```
//! use stripe_blocks::prelude::*;
//!
//! let partitioning = Partitioning::with_object_names("someDatasetName", 8u64, 8 * 1024 * 1024).unwrap();
//! let cells = BoundingBox::new(
//!     PointN::from([1024, 1024, 2048, 2048]),
//!     PointN::from([3072, 4096, 5120, 6144]),
//! )
//! .unwrap();
//!
//! let mut names = partitioning.iter_objects(&cells, RowMajorOrder).unwrap();
//! assert_eq!(names.next().as_deref(), Some("someDatasetName-32-32-64-64"));
//! ```

pub use stripe_blocks_core as core;
pub use stripe_blocks_partition as partition;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::partition::prelude::*;
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
