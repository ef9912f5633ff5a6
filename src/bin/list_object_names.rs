use stripe_blocks::prelude::*;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Print the names of the objects a dataset is partitioned into, in row-major order.
#[derive(Debug, Parser)]
struct Args {
    /// JSON file with `dataset_name`, `cell_size` and `target_object_size`. Overrides the sizing flags.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "someDatasetName")]
    dataset_name: String,

    /// Bytes per cell.
    #[arg(long, default_value_t = 8)]
    cell_size: u64,

    /// Bytes per object.
    #[arg(long, default_value_t = 8 * 1024 * 1024)]
    target_object_size: u64,

    /// Minimum corner of the cell bounding box (inclusive), comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "1024,1024,2048,2048"
    )]
    min: Vec<i64>,

    /// Least upper bound of the cell bounding box (exclusive), comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "3072,4096,5120,6144"
    )]
    lub: Vec<i64>,

    /// Stop after printing this many names.
    #[arg(long, default_value_t = 1000)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config: PartitioningConfig = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => PartitioningConfig {
            dataset_name: args.dataset_name.clone(),
            cell_size: args.cell_size,
            target_object_size: args.target_object_size,
        },
    };
    tracing::info!(?config, "partitioning dataset");

    let partitioning = config.build()?;
    let cell_box = BoundingBox::new(PointN::from(args.min), PointN::from(args.lub))?;
    let names = partitioning.iter_objects(&cell_box, RowMajorOrder)?;

    for name in names.take(args.limit) {
        println!("{}", name);
    }

    Ok(())
}
