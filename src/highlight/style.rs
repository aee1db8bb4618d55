use serde::{Deserialize, Serialize};

use super::{ElementRole, Emphasis, EmphasisUpdate, HighlightPhase};

/// Concrete appearance for one element after an emphasis update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub opacity: f64,
    pub outlined: bool,
    pub visible: bool,
}

/// Opacity and outline rules renderers apply to emphasis updates.
///
/// This is renderer-side configuration; the controller itself only produces
/// [`Emphasis`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisStyle {
    /// Data-mark opacity while nothing is highlighted.
    pub neutral_opacity: f64,
    /// Data-mark opacity for the highlighted category.
    pub emphasized_opacity: f64,
    pub dimmed_opacity: f64,
    pub legend_opacity: f64,
    pub legend_dimmed_opacity: f64,
    /// Outline the highlighted legend swatch.
    pub outline_emphasized_legend: bool,
    /// Hide dimmed data marks instead of fading them.
    pub hide_dimmed_marks: bool,
}

impl Default for EmphasisStyle {
    fn default() -> Self {
        Self::scatter()
    }
}

impl EmphasisStyle {
    /// Dense point clouds: slightly translucent at rest.
    #[must_use]
    pub fn scatter() -> Self {
        Self {
            neutral_opacity: 0.75,
            emphasized_opacity: 1.0,
            dimmed_opacity: 0.15,
            legend_opacity: 1.0,
            legend_dimmed_opacity: 0.3,
            outline_emphasized_legend: true,
            hide_dimmed_marks: false,
        }
    }

    #[must_use]
    pub fn bars() -> Self {
        Self {
            neutral_opacity: 0.9,
            ..Self::scatter()
        }
    }

    /// Legend acts as a filter: dimmed marks disappear.
    #[must_use]
    pub fn filtering() -> Self {
        Self {
            neutral_opacity: 1.0,
            emphasized_opacity: 1.0,
            dimmed_opacity: 0.0,
            legend_opacity: 1.0,
            legend_dimmed_opacity: 0.25,
            outline_emphasized_legend: false,
            hide_dimmed_marks: true,
        }
    }

    #[must_use]
    pub fn resolve(&self, update: EmphasisUpdate) -> ResolvedStyle {
        let neutral = update.phase == HighlightPhase::Neutral;
        match (update.role, update.emphasis) {
            (ElementRole::DataMark, Emphasis::Full) => ResolvedStyle {
                opacity: if neutral {
                    self.neutral_opacity
                } else {
                    self.emphasized_opacity
                },
                outlined: false,
                visible: true,
            },
            (ElementRole::DataMark, Emphasis::Dimmed) => ResolvedStyle {
                opacity: self.dimmed_opacity,
                outlined: false,
                visible: !self.hide_dimmed_marks,
            },
            (ElementRole::LegendRow, Emphasis::Full) => ResolvedStyle {
                opacity: self.legend_opacity,
                outlined: self.outline_emphasized_legend && !neutral,
                visible: true,
            },
            (ElementRole::LegendRow, Emphasis::Dimmed) => ResolvedStyle {
                opacity: self.legend_dimmed_opacity,
                outlined: false,
                visible: true,
            },
        }
    }
}
