use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::ChartResult;

use super::validation::{validate_bin_count, validate_domain, validate_thresholds};

/// How a histogram domain is partitioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinSpec {
    /// `n` equal-width bins spanning the domain.
    Count(usize),
    /// Explicit boundaries; only thresholds strictly inside the domain split it.
    Thresholds(Vec<f64>),
}

/// Largest bin count a [`BinSpec::Count`] may request.
pub const MAX_BIN_COUNT: usize = 10_000;

impl BinSpec {
    /// Checks the layout on its own, independent of any domain.
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Count(bin_count) => validate_bin_count(*bin_count).map(|_| ()),
            Self::Thresholds(thresholds) => validate_thresholds(thresholds).map(|_| ()),
        }
    }
}

impl Default for BinSpec {
    fn default() -> Self {
        Self::Count(18)
    }
}

/// One histogram bar: `[lower_bound, upper_bound)`, closed on the last bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Partitions `[domain_min, domain_max]` into contiguous bins and counts the
/// finite `values` falling into each.
///
/// A value equal to an interior boundary belongs to the bin that boundary
/// opens; `domain_max` itself belongs to the last bin. Finite values outside
/// the domain are clamped into the first or last bin so that counts always sum
/// to the number of finite inputs. A zero-width domain yields a single bin.
pub fn histogram_bins(
    values: &[f64],
    domain_min: f64,
    domain_max: f64,
    spec: &BinSpec,
) -> ChartResult<Vec<HistogramBin>> {
    let (domain_min, domain_max) = validate_domain(domain_min, domain_max)?;
    let boundaries = bin_boundaries(domain_min, domain_max, spec)?;
    let interior = &boundaries[1..boundaries.len() - 1];

    let mut counts = vec![0_usize; boundaries.len() - 1];
    let mut dropped = 0_usize;
    for &value in values {
        if !value.is_finite() {
            dropped += 1;
            continue;
        }
        let index = interior.partition_point(|boundary| *boundary <= value);
        counts[index] += 1;
    }

    if dropped > 0 {
        trace!(dropped, values = values.len(), "histogram dropped non-finite values");
    }

    Ok(boundaries
        .windows(2)
        .zip(counts)
        .map(|(edge, count)| HistogramBin {
            lower_bound: edge[0],
            upper_bound: edge[1],
            count,
        })
        .collect())
}

fn bin_boundaries(domain_min: f64, domain_max: f64, spec: &BinSpec) -> ChartResult<Vec<f64>> {
    if domain_min == domain_max {
        // A degenerate domain collapses to one bin; the bin layout is still validated.
        spec.validate()?;
        return Ok(vec![domain_min, domain_max]);
    }

    match spec {
        BinSpec::Count(bin_count) => {
            let bin_count = validate_bin_count(*bin_count)?;
            let width = (domain_max - domain_min) / bin_count as f64;
            let mut boundaries = Vec::with_capacity(bin_count + 1);
            boundaries.push(domain_min);
            for step in 1..bin_count {
                boundaries.push(domain_min + width * step as f64);
            }
            boundaries.push(domain_max);
            Ok(boundaries)
        }
        BinSpec::Thresholds(thresholds) => {
            let thresholds = validate_thresholds(thresholds)?;
            let mut boundaries = Vec::with_capacity(thresholds.len() + 2);
            boundaries.push(domain_min);
            boundaries.extend(
                thresholds
                    .iter()
                    .copied()
                    .filter(|threshold| *threshold > domain_min && *threshold < domain_max),
            );
            boundaries.push(domain_max);
            Ok(boundaries)
        }
    }
}

/// Minimum and maximum over the finite `values`; `None` when there are none.
#[must_use]
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let finite = || values.iter().copied().filter(|value| value.is_finite());
    let min = finite().min_by_key(|value| OrderedFloat(*value))?;
    let max = finite().max_by_key(|value| OrderedFloat(*value))?;
    Some((min, max))
}
