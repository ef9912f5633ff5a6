//! Strategies that decide how many cells go into one object.

use crate::PartitionError;

use core::fmt;
use std::sync::Arc;
use stripe_blocks_core::{integer_nth_root, scale_bounding_box, BoundingBox, BoundsError, PointN};

/// How many bytes a cell takes.
#[derive(Clone, Debug)]
pub enum SizingConfig {
    /// Every cell has the same size in bytes.
    Constant(u64),
    /// The size of a cell depends on where it is. Not supported by `Partitioning` yet.
    PerLocation(CellSizeLookup),
}

impl SizingConfig {
    /// The constant cell size, if there is one.
    #[inline]
    pub fn constant(&self) -> Option<u64> {
        match self {
            Self::Constant(size) => Some(*size),
            Self::PerLocation(_) => None,
        }
    }
}

impl From<u64> for SizingConfig {
    #[inline]
    fn from(cell_size: u64) -> Self {
        Self::Constant(cell_size)
    }
}

/// Looks up the size in bytes of the cell at a point.
#[derive(Clone)]
pub struct CellSizeLookup(Arc<dyn Fn(&PointN) -> u64 + Send + Sync>);

impl CellSizeLookup {
    pub fn new(lookup: impl Fn(&PointN) -> u64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(lookup))
    }

    #[inline]
    pub fn cell_size_at(&self, p: &PointN) -> u64 {
        (self.0)(p)
    }
}

impl fmt::Debug for CellSizeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CellSizeLookup").finish()
    }
}

/// Translates a bounding box in cell space into the bounding box of the objects that store those cells.
///
/// Every sizing strategy shares this signature, so the callers of `Partitioning` are unaffected by which one is in use.
pub trait ObjectSizing {
    fn object_bounding_box(&self, cell_box: &BoundingBox) -> Result<BoundingBox, PartitionError>;
}

/// Groups constant-size cells into hypercubes whose total size is as close to the target as possible without exceeding it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstantCubeSizing {
    cell_size: u64,
    target_object_size: u64,
}

impl ConstantCubeSizing {
    /// Fails unless both sizes are positive and at least one cell fits in an object, which guarantees a side length of at
    /// least 1 in any number of dimensions.
    pub fn new(cell_size: u64, target_object_size: u64) -> Result<Self, PartitionError> {
        if cell_size == 0 {
            return Err(PartitionError::NonPositiveCellSize);
        }
        if target_object_size == 0 {
            return Err(PartitionError::NonPositiveTargetObjectSize);
        }
        if target_object_size < cell_size {
            return Err(PartitionError::ObjectSmallerThanCell {
                cell_size,
                target_object_size,
            });
        }

        Ok(Self {
            cell_size,
            target_object_size,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> u64 {
        self.cell_size
    }

    #[inline]
    pub fn target_object_size(&self) -> u64 {
        self.target_object_size
    }

    /// The edge length, in cells, of an object hypercube with `dimensions` dimensions:
    /// `floor((target_object_size / cell_size) ^ (1 / dimensions))`. Returns `None` for zero dimensions.
    #[inline]
    pub fn side_len(&self, dimensions: usize) -> Option<i64> {
        if dimensions == 0 {
            return None;
        }

        let cells_per_object = self.target_object_size / self.cell_size;
        let dimensions = u32::try_from(dimensions).unwrap_or(u32::MAX);
        let side_len = integer_nth_root(cells_per_object, dimensions);

        Some(i64::try_from(side_len).unwrap_or(i64::MAX))
    }
}

impl ObjectSizing for ConstantCubeSizing {
    /// The cell box itself may hold more than `u64::MAX` cells, but the object box must be indexable by a `u64`.
    fn object_bounding_box(&self, cell_box: &BoundingBox) -> Result<BoundingBox, PartitionError> {
        let side_len = self
            .side_len(cell_box.dimensions())
            .ok_or(BoundsError::ZeroDimensions)?;
        let object_box = scale_bounding_box(cell_box, side_len)?;

        if object_box.is_empty() && !cell_box.is_empty() {
            return Err(PartitionError::EmptyObjectBoundingBox {
                cell_shape: cell_box.shape(),
                side_len,
            });
        }
        if object_box.volume().is_none() {
            return Err(PartitionError::TooManyObjects {
                object_shape: object_box.shape(),
            });
        }

        Ok(object_box)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
