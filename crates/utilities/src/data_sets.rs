use stripe_blocks_core::{BoundingBox, PointN};

/// Bytes per cell of the example dataset.
pub const EXAMPLE_CELL_SIZE: u64 = 8;

/// Bytes per object of the example dataset: 8 MiB.
pub const EXAMPLE_TARGET_OBJECT_SIZE: u64 = 8 * 1024 * 1024;

/// The cell bounding box of a 4D example dataset with shape `[2048, 3072, 3072, 4096]`.
pub fn example_cell_box() -> BoundingBox {
    BoundingBox::new(
        PointN::from([1024, 1024, 2048, 2048]),
        PointN::from([3072, 4096, 5120, 6144]),
    )
    .expect("example cell box is valid")
}

/// A cube of `edge_length` points per axis with its minimum at the origin.
pub fn origin_cube(dimensions: usize, edge_length: i64) -> BoundingBox {
    BoundingBox::from_min_and_shape(
        PointN::zero(dimensions),
        PointN::fill(dimensions, edge_length),
    )
    .expect("cube extent is valid")
}
