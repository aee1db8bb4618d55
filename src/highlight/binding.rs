use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    EmphasisTarget, HighlightController, PointerEvent, ResetScope, ResetSignal, Subscription,
};

/// Axis-aligned bounding box of a chart container, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A chart's highlight controller wired to a document-scope reset signal.
///
/// The reset listener is owned by this binding: dropping the binding (chart
/// torn down or rebuilt) unregisters it, so redraws never accumulate
/// listeners on the shared signal.
pub struct ChartHighlight<T> {
    controller: Rc<RefCell<HighlightController<T>>>,
    region: Region,
    subscription: Subscription,
}

impl<T: EmphasisTarget + 'static> ChartHighlight<T> {
    pub fn bind(controller: HighlightController<T>, region: Region, signal: &ResetSignal) -> Self {
        let reset_scope = controller.config().reset_scope;
        let controller = Rc::new(RefCell::new(controller));
        let weak = Rc::downgrade(&controller);

        let subscription = signal.subscribe(move |event: PointerEvent| {
            if reset_scope == ResetScope::OutsideRegion && region.contains(event.x, event.y) {
                return;
            }
            let Some(controller) = weak.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.on_external_reset(),
                Err(_) => warn!("highlight controller busy; external reset skipped"),
            }
        });
        debug!(?region, ?reset_scope, "chart highlight bound to reset signal");

        Self {
            controller,
            region,
            subscription,
        }
    }
}

impl<T: EmphasisTarget> ChartHighlight<T> {
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.subscription.is_connected()
    }

    #[must_use]
    pub fn controller(&self) -> Ref<'_, HighlightController<T>> {
        self.controller.borrow()
    }

    #[must_use]
    pub fn controller_mut(&self) -> RefMut<'_, HighlightController<T>> {
        self.controller.borrow_mut()
    }

    pub fn hover_enter(&self, key: &str) {
        self.with_controller(key, "hover_enter", |controller| controller.on_hover_enter(key));
    }

    pub fn hover_leave(&self, key: &str) {
        self.with_controller(key, "hover_leave", |controller| controller.on_hover_leave(key));
    }

    pub fn click(&self, key: &str) {
        self.with_controller(key, "click", |controller| controller.on_click(key));
    }

    /// Legend input arriving while the controller is borrowed is dropped.
    fn with_controller(
        &self,
        key: &str,
        transition: &'static str,
        apply: impl FnOnce(&mut HighlightController<T>),
    ) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => apply(&mut controller),
            Err(_) => warn!(key, transition, "highlight controller busy; legend input skipped"),
        }
    }
}
