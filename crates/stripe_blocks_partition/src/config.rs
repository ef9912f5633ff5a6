use crate::{ObjectNamesBuilder, PartitionError, Partitioning, SizingConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plain-data description of a `Partitioning` with constant cell sizes, e.g. for loading from a config file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PartitioningConfig {
    pub dataset_name: String,
    /// Bytes per cell.
    pub cell_size: u64,
    /// Bytes per object.
    pub target_object_size: u64,
}

impl PartitioningConfig {
    pub fn build(&self) -> Result<Partitioning<ObjectNamesBuilder>, PartitionError> {
        Partitioning::with_object_names(
            self.dataset_name.as_str(),
            SizingConfig::Constant(self.cell_size),
            self.target_object_size,
        )
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
