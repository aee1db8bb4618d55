use serde::{Deserialize, Serialize};

/// Which legend gestures drive the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendBehavior {
    /// Hover previews a category, click pins it.
    #[default]
    HoverAndPin,
    /// Click-only legends used as filters; hover input is ignored.
    PinOnly,
}

impl LegendBehavior {
    #[must_use]
    pub fn allows_hover(self) -> bool {
        matches!(self, Self::HoverAndPin)
    }
}

/// Which broadcast pointer events clear a chart's highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetScope {
    /// Only pointer events landing outside the chart's region.
    #[default]
    OutsideRegion,
    /// Every broadcast pointer event. Legend clicks must not be broadcast.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub behavior: LegendBehavior,
    pub reset_scope: ResetScope,
}

impl HighlightConfig {
    #[must_use]
    pub fn new(behavior: LegendBehavior) -> Self {
        Self {
            behavior,
            reset_scope: ResetScope::default(),
        }
    }

    #[must_use]
    pub fn with_reset_scope(mut self, reset_scope: ResetScope) -> Self {
        self.reset_scope = reset_scope;
        self
    }
}
