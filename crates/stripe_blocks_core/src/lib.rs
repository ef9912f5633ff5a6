//! The core data types for N-dimensional integer lattices, where N is chosen at runtime:
//! - `PointN`: an N-dimensional integer point, used for both coordinates and per-axis lengths
//! - `BoundingBox`: a validated, half-open N-dimensional box
//!
//! Plus the arithmetic that partitioning a lattice needs: corner scaling, bounds checks on box-relative offsets, and exact
//! integer roots.

pub mod bounding_box;
pub mod int_math;
pub mod point;

pub use bounding_box::{is_out_of_range, scale_bounding_box, BoundingBox, BoundsError};
pub use int_math::integer_nth_root;
pub use point::{Components, PointN};

pub mod prelude {
    pub use super::{BoundingBox, BoundsError, PointN};
}
