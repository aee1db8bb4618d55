use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pointer interaction observed at document scope, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

type Listener = Box<dyn FnMut(PointerEvent)>;

#[derive(Default)]
struct SignalInner {
    listeners: RefCell<IndexMap<u64, Listener>>,
    /// Ids unsubscribed while their listener was detached for dispatch.
    tombstones: RefCell<Vec<u64>>,
    /// Nesting depth of `dispatch`; tombstones are cleared only at depth 0.
    dispatch_depth: Cell<usize>,
    next_id: Cell<u64>,
}

impl SignalInner {
    fn unsubscribe(&self, id: u64) {
        let removed = self.listeners.borrow_mut().shift_remove(&id).is_some();
        if !removed && self.dispatch_depth.get() > 0 {
            self.tombstones.borrow_mut().push(id);
        }
        trace!(id, "reset listener unsubscribed");
    }
}

/// Document-scope broadcaster of pointer interactions.
///
/// Listeners live exactly as long as the [`Subscription`] returned by
/// [`ResetSignal::subscribe`]. Subscribing or dropping subscriptions from
/// inside a listener is allowed; changes take effect after the current
/// dispatch.
#[derive(Clone, Default)]
pub struct ResetSignal {
    inner: Rc<SignalInner>,
}

impl ResetSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "dropping the subscription unregisters the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(PointerEvent) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().insert(id, Box::new(listener));
        trace!(id, "reset listener subscribed");
        Subscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every listener in subscription order.
    ///
    /// A nested `dispatch` from inside a listener only reaches listeners
    /// subscribed since the outer dispatch began.
    pub fn dispatch(&self, event: PointerEvent) {
        let mut current = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        let depth = self.inner.dispatch_depth.get();
        self.inner.dispatch_depth.set(depth + 1);
        for (id, listener) in &mut current {
            if self.inner.tombstones.borrow().contains(id) {
                continue;
            }
            listener(event);
        }
        self.inner.dispatch_depth.set(depth);

        // Dropping a listener may drop a subscription it owns, so no borrow is
        // held across `retain`.
        let tombstones = if depth == 0 {
            std::mem::take(&mut *self.inner.tombstones.borrow_mut())
        } else {
            self.inner.tombstones.borrow().clone()
        };
        current.retain(|id, _| !tombstones.contains(id));
        let mut listeners = self.inner.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        current.extend(added);
        *listeners = current;
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

/// Registration handle; unregisters its listener when dropped.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    signal: Weak<SignalInner>,
}

impl Subscription {
    /// `true` while the signal that issued this subscription is alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.signal.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}
