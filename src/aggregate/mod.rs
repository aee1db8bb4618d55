//! Pure aggregation helpers turning rows into chart-ready summaries.
//!
//! Nothing here keeps state between calls: every summary is recomputed from
//! the rows handed in. Missing data produces zero or empty results; only
//! malformed arguments are rejected.

pub mod density;
pub mod group;
pub mod histogram;
pub mod stack;
mod validation;

pub use density::{
    DensityPoint, MAX_SAMPLE_GRID_LEN, epanechnikov, kernel_density, max_density, sample_grid,
};
pub use group::{CrossCell, cross_count, group_count, group_mean, group_share, round_bucket};
pub use histogram::{BinSpec, HistogramBin, MAX_BIN_COUNT, extent, histogram_bins};
pub use stack::{StackLayer, StackSegment, stack_extent, stack_layers};
