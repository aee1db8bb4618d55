use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{CategoryMap, CategorySet};
use crate::error::{ChartError, ChartResult};

use super::{
    Emphasis, HighlightConfig, HighlightContext, HighlightEvent, HighlightObserver,
    HighlightPhase, HighlightState,
};

/// Part a tagged element plays in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    LegendRow,
    DataMark,
}

/// Emphasis pushed to one tagged element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisUpdate {
    pub emphasis: Emphasis,
    pub role: ElementRole,
    pub phase: HighlightPhase,
}

/// Caller-owned visual element restyled by the controller.
///
/// The controller never inspects the element; it only reports the emphasis
/// the element should now show.
pub trait EmphasisTarget {
    fn apply_emphasis(&mut self, update: EmphasisUpdate);
}

impl<T: EmphasisTarget + ?Sized> EmphasisTarget for Box<T> {
    fn apply_emphasis(&mut self, update: EmphasisUpdate) {
        (**self).apply_emphasis(update);
    }
}

/// Handle to an element registered with a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(usize);

struct TaggedElement<T> {
    key_index: usize,
    role: ElementRole,
    target: T,
}

/// Legend-driven highlight for one chart instance.
///
/// Every accepted transition recomputes emphasis for the whole tagged set,
/// legend rows and data marks alike, then notifies observers of the change.
/// A chart rebuild creates a fresh controller; no state carries over.
pub struct HighlightController<T> {
    categories: CategorySet,
    config: HighlightConfig,
    state: HighlightState,
    elements: Vec<TaggedElement<T>>,
    observers: Vec<Box<dyn HighlightObserver>>,
    revision: u64,
}

impl<T> HighlightController<T> {
    #[must_use]
    pub fn new(categories: CategorySet, config: HighlightConfig) -> Self {
        Self {
            categories,
            config,
            state: HighlightState::neutral(),
            elements: Vec::new(),
            observers: Vec::new(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    #[must_use]
    pub fn config(&self) -> HighlightConfig {
        self.config
    }

    #[must_use]
    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> HighlightPhase {
        self.state.phase()
    }

    /// Number of state changes since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn emphasis_for(&self, key: &str) -> Emphasis {
        self.state.emphasis_for(key)
    }

    /// Emphasis of every category, in set order.
    #[must_use]
    pub fn emphasis_map(&self) -> CategoryMap<Emphasis> {
        self.categories
            .map_with(|index| match self.categories.get(index) {
                Some(key) => self.state.emphasis_for(key),
                None => Emphasis::Full,
            })
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&T> {
        self.elements.get(id.0).map(|element| &element.target)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.elements.get_mut(id.0).map(|element| &mut element.target)
    }

    /// Elements tagged with `key`, in registration order.
    pub fn elements_for<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a T> + 'a {
        let key_index = self.categories.index_of(key);
        self.elements
            .iter()
            .filter(move |element| Some(element.key_index) == key_index)
            .map(|element| &element.target)
    }

    /// Registers an observer with a unique, non-empty id.
    pub fn register_observer(&mut self, observer: Box<dyn HighlightObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidArgument(
                "highlight observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidArgument(format!(
                "highlight observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|observer| observer.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    fn context(&self) -> HighlightContext {
        HighlightContext {
            phase: self.state.phase(),
            effective_key: self.state.effective_key().map(str::to_owned),
            revision: self.revision,
        }
    }
}

impl<T: EmphasisTarget> HighlightController<T> {
    pub fn register_legend_row(&mut self, key: &str, target: T) -> ChartResult<ElementId> {
        self.register(key, ElementRole::LegendRow, target)
    }

    pub fn register_data_mark(&mut self, key: &str, target: T) -> ChartResult<ElementId> {
        self.register(key, ElementRole::DataMark, target)
    }

    /// Tags `target` with `key` and immediately applies the current emphasis.
    pub fn register(&mut self, key: &str, role: ElementRole, mut target: T) -> ChartResult<ElementId> {
        let Some(key_index) = self.categories.index_of(key) else {
            return Err(ChartError::InvalidArgument(format!(
                "cannot tag element with unknown category `{key}`"
            )));
        };
        target.apply_emphasis(EmphasisUpdate {
            emphasis: self.state.emphasis_for(key),
            role,
            phase: self.state.phase(),
        });
        self.elements.push(TaggedElement {
            key_index,
            role,
            target,
        });
        Ok(ElementId(self.elements.len() - 1))
    }

    pub fn on_hover_enter(&mut self, key: &str) {
        if !self.accepts_key(key, "hover_enter") {
            return;
        }
        if !self.config.behavior.allows_hover() {
            trace!(key, "hover ignored by pin-only legend");
            return;
        }
        let next = self.state.hover_enter(key);
        let event = HighlightEvent::HoverEntered {
            key: key.to_owned(),
        };
        self.transition(next, event);
    }

    pub fn on_hover_leave(&mut self, key: &str) {
        if !self.accepts_key(key, "hover_leave") {
            return;
        }
        if !self.config.behavior.allows_hover() {
            trace!(key, "hover ignored by pin-only legend");
            return;
        }
        let next = self.state.hover_leave(key);
        let event = HighlightEvent::HoverLeft {
            key: key.to_owned(),
        };
        self.transition(next, event);
    }

    pub fn on_click(&mut self, key: &str) {
        if !self.accepts_key(key, "click") {
            return;
        }
        let next = self.state.click(key);
        let event = if next.active() == Some(key) {
            HighlightEvent::Pinned {
                key: key.to_owned(),
            }
        } else {
            HighlightEvent::Unpinned {
                key: key.to_owned(),
            }
        };
        self.transition(next, event);
    }

    pub fn on_external_reset(&mut self) {
        let next = self.state.reset();
        self.transition(next, HighlightEvent::Reset);
    }

    /// Reapplies the current emphasis to every tagged element.
    pub fn refresh(&mut self) {
        let phase = self.state.phase();
        for element in &mut self.elements {
            let emphasis = match self.categories.get(element.key_index) {
                Some(key) => self.state.emphasis_for(key),
                None => Emphasis::Full,
            };
            element.target.apply_emphasis(EmphasisUpdate {
                emphasis,
                role: element.role,
                phase,
            });
        }
    }

    fn accepts_key(&self, key: &str, transition: &'static str) -> bool {
        if self.categories.contains(key) {
            return true;
        }
        warn!(key, transition, "ignoring highlight input for unknown category");
        false
    }

    fn transition(&mut self, next: HighlightState, event: HighlightEvent) {
        let changed = next != self.state;
        if changed {
            debug!(
                from = ?self.state.phase(),
                to = ?next.phase(),
                effective_key = next.effective_key(),
                "highlight transition"
            );
            self.state = next;
            self.revision += 1;
        }

        self.refresh();

        if changed {
            let context = self.context();
            for observer in &mut self.observers {
                observer.on_event(&event, &context);
            }
        }
    }
}
