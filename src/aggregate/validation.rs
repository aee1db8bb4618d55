use crate::error::{ChartError, ChartResult};

use super::{MAX_BIN_COUNT, MAX_SAMPLE_GRID_LEN};

pub(super) fn validate_domain(domain_min: f64, domain_max: f64) -> ChartResult<(f64, f64)> {
    if !domain_min.is_finite() || !domain_max.is_finite() {
        return Err(ChartError::InvalidArgument(
            "histogram domain bounds must be finite".to_owned(),
        ));
    }
    if domain_min > domain_max {
        return Err(ChartError::InvalidArgument(format!(
            "histogram domain min ({domain_min}) must be <= max ({domain_max})"
        )));
    }
    Ok((domain_min, domain_max))
}

pub(super) fn validate_bin_count(bin_count: usize) -> ChartResult<usize> {
    if bin_count == 0 {
        return Err(ChartError::InvalidArgument(
            "histogram bin count must be >= 1".to_owned(),
        ));
    }
    if bin_count > MAX_BIN_COUNT {
        return Err(ChartError::InvalidArgument(format!(
            "histogram bin count must be <= {MAX_BIN_COUNT}"
        )));
    }
    Ok(bin_count)
}

pub(super) fn validate_thresholds(thresholds: &[f64]) -> ChartResult<&[f64]> {
    if thresholds.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidArgument(
            "histogram thresholds must be finite".to_owned(),
        ));
    }
    validate_strictly_ascending(thresholds, "histogram thresholds")?;
    Ok(thresholds)
}

pub(super) fn validate_bandwidth(bandwidth: f64) -> ChartResult<f64> {
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return Err(ChartError::InvalidArgument(
            "kernel bandwidth must be finite and > 0".to_owned(),
        ));
    }
    Ok(bandwidth)
}

pub(super) fn validate_sample_grid(grid: &[f64]) -> ChartResult<&[f64]> {
    if grid.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidArgument(
            "sample grid points must be finite".to_owned(),
        ));
    }
    validate_strictly_ascending(grid, "sample grid")?;
    Ok(grid)
}

/// Returns the upper bound on the number of grid points.
pub(super) fn validate_grid_range(start: f64, stop: f64, step: f64) -> ChartResult<usize> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(ChartError::InvalidArgument(
            "sample grid bounds must be finite".to_owned(),
        ));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(ChartError::InvalidArgument(
            "sample grid step must be finite and > 0".to_owned(),
        ));
    }
    if start >= stop {
        return Ok(0);
    }
    let len = ((stop - start) / step).ceil();
    if !len.is_finite() || len > MAX_SAMPLE_GRID_LEN as f64 {
        return Err(ChartError::InvalidArgument(format!(
            "sample grid must have <= {MAX_SAMPLE_GRID_LEN} points"
        )));
    }
    Ok(len as usize)
}

fn validate_strictly_ascending(values: &[f64], what: &str) -> ChartResult<()> {
    if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(ChartError::InvalidArgument(format!(
            "{what} must be strictly ascending (violation at index {})",
            index + 1
        )));
    }
    Ok(())
}
