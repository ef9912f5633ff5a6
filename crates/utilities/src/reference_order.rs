//! Row-major order unrolled by hand for a fixed number of dimensions. These only exist to cross-check the dimension-generic
//! order in tests, and deliberately test bounds in absolute coordinates rather than offsets.

use stripe_blocks_core::{BoundingBox, PointN};

fn lengths(bbox: &BoundingBox, dimensions: usize) -> Vec<u64> {
    assert_eq!(bbox.dimensions(), dimensions);

    bbox.shape().iter().map(|c| c as u64).collect()
}

fn absolute_if_in_bounds(bbox: &BoundingBox, offset: &[u64]) -> Option<PointN> {
    let p: PointN = bbox
        .minimum()
        .iter()
        .zip(offset)
        .map(|(min, &o)| min.saturating_add(i64::try_from(o).unwrap_or(i64::MAX)))
        .collect();

    let out_of_bounds = p
        .iter()
        .zip(bbox.least_upper_bound().iter())
        .any(|(c, lub)| c >= lub);

    if out_of_bounds {
        None
    } else {
        Some(p)
    }
}

pub fn row_major_order_2d(bbox: &BoundingBox, pos: u64) -> Option<PointN> {
    let d = lengths(bbox, 2);

    let x = pos % d[0];
    let y = pos / d[0];

    absolute_if_in_bounds(bbox, &[x, y])
}

pub fn row_major_order_3d(bbox: &BoundingBox, pos: u64) -> Option<PointN> {
    let d = lengths(bbox, 3);

    let x = pos % d[0];
    let y = (pos % (d[0] * d[1])) / d[0];
    let z = pos / (d[0] * d[1]);

    absolute_if_in_bounds(bbox, &[x, y, z])
}

pub fn row_major_order_4d(bbox: &BoundingBox, pos: u64) -> Option<PointN> {
    let d = lengths(bbox, 4);

    let x = pos % d[0];
    let y = (pos % (d[0] * d[1])) / d[0];
    let z = (pos % (d[0] * d[1] * d[2])) / (d[0] * d[1]);
    let t = pos / (d[0] * d[1] * d[2]);

    absolute_if_in_bounds(bbox, &[x, y, z, t])
}
