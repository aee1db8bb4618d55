use serde::{Deserialize, Serialize};

/// Visual weight of an element tagged with a category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    Full,
    Dimmed,
}

/// Coarse phase of a highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HighlightPhase {
    /// Nothing hovered or pinned; every element at full emphasis.
    Neutral,
    /// A legend row is hovered and nothing is pinned.
    Hover,
    /// A category is pinned by click; hover is ignored until it is cleared.
    Pinned,
}

/// Per-chart highlight state: at most one pinned and one hovered key.
///
/// Transitions are pure: each returns the next state and leaves `self`
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightState {
    active: Option<String>,
    hovered: Option<String>,
}

impl HighlightState {
    #[must_use]
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Pinned key, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// `active`, falling back to `hovered`.
    #[must_use]
    pub fn effective_key(&self) -> Option<&str> {
        self.active().or(self.hovered())
    }

    #[must_use]
    pub fn phase(&self) -> HighlightPhase {
        match (&self.active, &self.hovered) {
            (Some(_), _) => HighlightPhase::Pinned,
            (None, Some(_)) => HighlightPhase::Hover,
            (None, None) => HighlightPhase::Neutral,
        }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.phase() == HighlightPhase::Neutral
    }

    #[must_use]
    pub fn emphasis_for(&self, key: &str) -> Emphasis {
        match self.effective_key() {
            None => Emphasis::Full,
            Some(effective) if effective == key => Emphasis::Full,
            Some(_) => Emphasis::Dimmed,
        }
    }

    /// Hover is recorded only while nothing is pinned.
    #[must_use]
    pub fn hover_enter(&self, key: &str) -> Self {
        if self.active.is_some() {
            return self.clone();
        }
        Self {
            active: None,
            hovered: Some(key.to_owned()),
        }
    }

    /// Clears hover only when `key` is the hovered one.
    #[must_use]
    pub fn hover_leave(&self, key: &str) -> Self {
        if self.hovered() != Some(key) {
            return self.clone();
        }
        Self {
            active: self.active.clone(),
            hovered: None,
        }
    }

    /// Pins `key`, or unpins it when it is already pinned.
    #[must_use]
    pub fn click(&self, key: &str) -> Self {
        let active = if self.active() == Some(key) {
            None
        } else {
            Some(key.to_owned())
        };
        Self {
            active,
            hovered: self.hovered.clone(),
        }
    }

    #[must_use]
    pub fn reset(&self) -> Self {
        Self::neutral()
    }
}
