use stripe_blocks_partition::prelude::*;
use stripe_blocks_partition::row_major_order;
use utilities::data_sets::origin_cube;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn row_major_order_by_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_major_order");
    for dimensions in DIMENSIONS.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(dimensions),
            dimensions,
            |b, &dimensions| {
                let bbox = origin_cube(dimensions, 16);
                let volume = bbox.volume().unwrap();
                let mut pos = 0;
                b.iter(|| {
                    black_box(row_major_order(&bbox, pos));
                    pos = (pos + 7919) % volume;
                });
            },
        );
    }
    group.finish();
}

fn object_names_full_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_names");
    for edge_length in EDGE_LENGTHS.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(edge_length),
            edge_length,
            |b, &edge_length| {
                b.iter_with_setup(
                    || ObjectNames::new(origin_cube(4, edge_length), RowMajorOrder, "bench"),
                    |names| {
                        for name in names {
                            black_box(name);
                        }
                    },
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    row_major_order_by_dimension,
    object_names_full_enumeration
);
criterion_main!(benches);

const DIMENSIONS: [usize; 3] = [2, 3, 4];
const EDGE_LENGTHS: [i64; 3] = [4, 8, 16];
