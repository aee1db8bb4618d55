use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel-density")]
use rayon::prelude::*;

use crate::error::ChartResult;

use super::validation::{validate_bandwidth, validate_grid_range, validate_sample_grid};

/// Density estimate evaluated at one grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub density: f64,
}

/// Epanechnikov kernel scaled by `bandwidth`.
///
/// `offset` is the raw distance `x - v`; the kernel is
/// `0.75 * (1 - u^2) / bandwidth` for `u = offset / bandwidth`, `|u| <= 1`.
#[must_use]
pub fn epanechnikov(offset: f64, bandwidth: f64) -> f64 {
    let u = offset / bandwidth;
    if u.abs() <= 1.0 {
        0.75 * (1.0 - u * u) / bandwidth
    } else {
        0.0
    }
}

/// Kernel density estimate of `values` at every point of `sample_grid`.
///
/// Non-finite values are ignored. With no finite value the curve is zero at
/// every grid point. The grid must be finite and strictly ascending and the
/// bandwidth finite and positive.
pub fn kernel_density(
    values: &[f64],
    sample_grid: &[f64],
    bandwidth: f64,
) -> ChartResult<Vec<DensityPoint>> {
    let bandwidth = validate_bandwidth(bandwidth)?;
    let sample_grid = validate_sample_grid(sample_grid)?;

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < values.len() {
        trace!(
            dropped = values.len() - finite.len(),
            "kernel density ignored non-finite values"
        );
    }

    if finite.is_empty() {
        return Ok(sample_grid
            .iter()
            .map(|&x| DensityPoint { x, density: 0.0 })
            .collect());
    }

    let evaluate = |x: f64| DensityPoint {
        x,
        density: finite
            .iter()
            .map(|&v| epanechnikov(x - v, bandwidth))
            .sum::<f64>()
            / finite.len() as f64,
    };

    #[cfg(feature = "parallel-density")]
    {
        Ok(sample_grid.par_iter().map(|&x| evaluate(x)).collect())
    }

    #[cfg(not(feature = "parallel-density"))]
    {
        Ok(sample_grid.iter().map(|&x| evaluate(x)).collect())
    }
}

/// Largest grid [`sample_grid`] will build.
pub const MAX_SAMPLE_GRID_LEN: usize = 1_000_000;

/// Half-open arithmetic grid `[start, stop)` advancing by `step`.
///
/// Points are computed as `start + i * step` so rounding does not accumulate.
/// `start >= stop` yields an empty grid. Grids longer than
/// [`MAX_SAMPLE_GRID_LEN`] are rejected.
pub fn sample_grid(start: f64, stop: f64, step: f64) -> ChartResult<Vec<f64>> {
    let len = validate_grid_range(start, stop, step)?;
    Ok((0..len)
        .map(|index| start + index as f64 * step)
        .filter(|x| *x < stop)
        .collect())
}

/// Peak density of a curve; `0.0` for an empty curve.
#[must_use]
pub fn max_density(curve: &[DensityPoint]) -> f64 {
    curve
        .iter()
        .map(|point| OrderedFloat(point.density))
        .max()
        .map_or(0.0, |peak| peak.0)
}
