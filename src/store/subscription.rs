//! Listener registry and the subscription handle returned to callers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of a registered listener, unique per store.
pub(crate) type ListenerId = u64;

pub(crate) type Listener = Rc<dyn Fn()>;

/// Ordered listener list shared between a store and its subscriptions.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove a listener; returns whether it was still registered.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current listener sequence, in subscription order.
    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Listener)> {
        self.entries.clone()
    }
}

/// Handle returned by [`Store::subscribe`](crate::store::Store::subscribe).
///
/// Dropping the handle does *not* unsubscribe; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove the listener.
/// The handle holds no strong reference to the store.
#[derive(Clone)]
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, listeners: &Rc<RefCell<Listeners>>) -> Self {
        Self {
            id,
            listeners: Rc::downgrade(listeners),
        }
    }

    /// Remove exactly this listener from the store.
    ///
    /// Idempotent: repeat calls, or calls after the store is gone, do
    /// nothing. Returns whether this call removed the listener.
    pub fn unsubscribe(&self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => listeners.borrow_mut().remove(self.id),
            None => false,
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .is_some_and(|listeners| listeners.borrow().contains(self.id))
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Listener {
        Rc::new(|| {})
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut listeners = Listeners::default();
        let a = listeners.add(noop());
        let b = listeners.add(noop());

        assert!(a < b);
        let order: Vec<ListenerId> = listeners.snapshot().iter().map(|(id, _)| *id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut listeners = Listeners::default();
        let id = listeners.add(noop());

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut listeners = Listeners::default();
        let first = listeners.add(noop());
        listeners.remove(first);
        let second = listeners.add(noop());

        assert_ne!(first, second);
    }

    #[test]
    fn subscription_outliving_registry_is_inert() {
        let registry = Rc::new(RefCell::new(Listeners::default()));
        let id = registry.borrow_mut().add(noop());
        let subscription = Subscription::new(id, &registry);

        assert!(subscription.is_active());
        drop(registry);
        assert!(!subscription.is_active());
        assert!(!subscription.unsubscribe());
    }
}
