//! Per-chart configuration loaded from JSON and validated on load.

use serde::{Deserialize, Serialize};

use crate::aggregate::{BinSpec, sample_grid};
use crate::error::{ChartError, ChartResult};
use crate::highlight::{EmphasisStyle, HighlightConfig, LegendBehavior};

/// Kernel bandwidth plus the `[grid_start, grid_stop)` evaluation grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityConfig {
    pub bandwidth: f64,
    pub grid_start: f64,
    pub grid_stop: f64,
    pub grid_step: f64,
}

impl DensityConfig {
    pub fn new(bandwidth: f64, grid_start: f64, grid_stop: f64, grid_step: f64) -> ChartResult<Self> {
        let config = Self {
            bandwidth,
            grid_start,
            grid_stop,
            grid_step,
        };
        config.validate()?;
        Ok(config)
    }

    /// Study hours per stress level (violin).
    #[must_use]
    pub fn study_hours_violin() -> Self {
        Self {
            bandwidth: 0.35,
            grid_start: 0.0,
            grid_stop: 12.0,
            grid_step: 0.15,
        }
    }

    /// Sleep hours per stress level (ridgeline).
    #[must_use]
    pub fn sleep_hours_ridgeline() -> Self {
        Self {
            bandwidth: 0.3,
            grid_start: 3.5,
            grid_stop: 10.5,
            grid_step: 0.15,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.bandwidth.is_finite() || self.bandwidth <= 0.0 {
            return Err(ChartError::InvalidArgument(
                "density bandwidth must be finite and > 0".to_owned(),
            ));
        }
        if self.grid_start >= self.grid_stop {
            return Err(ChartError::InvalidArgument(
                "density grid_start must be < grid_stop".to_owned(),
            ));
        }
        self.sample_grid().map(|_| ())
    }

    pub fn sample_grid(&self) -> ChartResult<Vec<f64>> {
        sample_grid(self.grid_start, self.grid_stop, self.grid_step)
    }
}

/// Everything one chart needs besides its rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub highlight: HighlightConfig,
    pub style: EmphasisStyle,
    pub bins: Option<BinSpec>,
    pub density: Option<DensityConfig>,
}

impl ChartConfig {
    /// Overview histograms (18 equal-width bins).
    #[must_use]
    pub fn histogram() -> Self {
        Self {
            style: EmphasisStyle::bars(),
            bins: Some(BinSpec::Count(18)),
            ..Self::default()
        }
    }

    /// Sleep histogram on the generation pages (15 bins).
    #[must_use]
    pub fn sleep_histogram() -> Self {
        Self {
            bins: Some(BinSpec::Count(15)),
            ..Self::histogram()
        }
    }

    #[must_use]
    pub fn violin() -> Self {
        Self {
            highlight: HighlightConfig::new(LegendBehavior::PinOnly),
            style: EmphasisStyle::filtering(),
            density: Some(DensityConfig::study_hours_violin()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ridgeline() -> Self {
        Self {
            density: Some(DensityConfig::sleep_hours_ridgeline()),
            ..Self::violin()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(bins) = &self.bins {
            bins.validate()?;
        }
        if let Some(density) = &self.density {
            density.validate()?;
        }
        for (name, value) in [
            ("neutral_opacity", self.style.neutral_opacity),
            ("emphasized_opacity", self.style.emphasized_opacity),
            ("dimmed_opacity", self.style.dimmed_opacity),
            ("legend_opacity", self.style.legend_opacity),
            ("legend_dimmed_opacity", self.style.legend_dimmed_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidArgument(format!(
                    "style {name} must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidArgument(format!("failed to serialize chart config json: {e}"))
        })
    }
}
