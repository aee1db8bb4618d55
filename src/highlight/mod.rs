//! Legend-driven cross-highlighting shared by every chart.
//!
//! One [`HighlightController`] per chart instance tracks a pinned and a
//! hovered category and pushes [`Emphasis`] to caller-owned elements.
//! [`ChartHighlight`] ties a controller to a document-scope [`ResetSignal`]
//! for "click outside clears the highlight", releasing the listener when the
//! chart goes away.

mod behavior;
mod binding;
mod controller;
mod observer;
mod reset;
mod snapshot;
mod state;
mod style;

pub use behavior::{HighlightConfig, LegendBehavior, ResetScope};
pub use binding::{ChartHighlight, Region};
pub use controller::{ElementId, ElementRole, EmphasisTarget, EmphasisUpdate, HighlightController};
pub use observer::{HighlightContext, HighlightEvent, HighlightObserver};
pub use reset::{PointerEvent, ResetSignal, Subscription};
pub use snapshot::{
    HIGHLIGHT_SNAPSHOT_JSON_SCHEMA_V1, HighlightSnapshot, HighlightSnapshotJsonContractV1,
};
pub use state::{Emphasis, HighlightPhase, HighlightState};
pub use style::{EmphasisStyle, ResolvedStyle};
