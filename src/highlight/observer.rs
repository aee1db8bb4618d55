use serde::{Deserialize, Serialize};

use super::HighlightPhase;

/// State change emitted after a transition that altered the highlight state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightEvent {
    HoverEntered { key: String },
    HoverLeft { key: String },
    Pinned { key: String },
    Unpinned { key: String },
    Reset,
}

/// Read-only view of the controller passed along with each event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightContext {
    pub phase: HighlightPhase,
    pub effective_key: Option<String>,
    pub revision: u64,
}

/// Hook for callers that react to highlight changes beyond restyling
/// (tooltips, linked views, analytics).
///
/// Observers see events after every tagged element has been restyled.
pub trait HighlightObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &HighlightEvent, context: &HighlightContext);
}
