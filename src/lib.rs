//! lifestyle-charts: aggregation and cross-highlight core for the student
//! lifestyle dashboards.
//!
//! Rows come in already loaded; [`aggregate`] turns them into chart-ready
//! summaries and [`highlight`] coordinates legend-driven emphasis across the
//! marks a renderer draws from those summaries.

pub mod aggregate;
pub mod config;
pub mod core;
pub mod error;
pub mod highlight;
pub mod telemetry;

pub use config::{ChartConfig, DensityConfig};
pub use error::{ChartError, ChartResult};
