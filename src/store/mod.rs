//! Generic single-state container with reducer-driven updates.
//!
//! A [`Store`] owns exactly one state slot and an ordered list of
//! listeners. State only ever changes through [`Store::dispatch`]:
//! the reducer computes the next state, then every listener is notified
//! synchronously, in subscription order, with no arguments. Listeners
//! read the new state through [`Store::state`] or [`Store::with_state`].
//!
//! Stores are single-threaded. A `Store` is a cheap, cloneable handle;
//! clones share the same state and listeners.
//!
//! # Example
//!
//! ```rust
//! use pureform::calculator::{CalculatorAction, CalculatorReducer};
//! use pureform::store::Store;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let store = Store::new(CalculatorReducer);
//! let renders = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&renders);
//! let subscription = store.subscribe(move || counter.set(counter.get() + 1));
//!
//! store.dispatch(CalculatorAction::Number("3".into()));
//! store.dispatch(CalculatorAction::Add);
//! store.dispatch(CalculatorAction::Number("4".into()));
//! store.dispatch(CalculatorAction::Equal);
//!
//! assert_eq!(store.state().current, "7");
//! assert_eq!(renders.get(), 4);
//!
//! subscription.unsubscribe();
//! store.dispatch(CalculatorAction::Clear);
//! assert_eq!(renders.get(), 4);
//! ```

mod subscription;

pub use subscription::Subscription;

use crate::core::{Action, Reducer};
use crate::snapshot::Snapshot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use subscription::Listeners;

struct Inner<R: Reducer> {
    reducer: R,
    state: RefCell<R::State>,
    listeners: Rc<RefCell<Listeners>>,
}

/// Reducer-based state container.
pub struct Store<R: Reducer> {
    inner: Rc<Inner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store and seed it with the reducer's no-op action.
    ///
    /// After construction the state equals
    /// `reducer.reduce(&reducer.initial_state(), &Action::seed())`.
    pub fn new(reducer: R) -> Self {
        Self::with_seed(reducer, R::Action::seed())
    }

    /// Create a store seeded with a caller-supplied initial action.
    pub fn with_seed(reducer: R, seed: R::Action) -> Self {
        let state = reducer.reduce(&reducer.initial_state(), &seed);
        tracing::debug!(action = seed.name(), "seeded store");
        Self::from_state(reducer, state)
    }

    fn from_state(reducer: R, state: R::State) -> Self {
        Self {
            inner: Rc::new(Inner {
                reducer,
                state: RefCell::new(state),
                listeners: Rc::new(RefCell::new(Listeners::default())),
            }),
        }
    }

    /// Reduce `action` into the state, then notify listeners.
    ///
    /// Listeners are taken from a snapshot made once the new state is in
    /// place: listeners subscribed during notification first run on the
    /// next dispatch, and a listener unsubscribed during notification is
    /// skipped if it has not run yet. Listeners may dispatch again.
    pub fn dispatch(&self, action: R::Action) {
        let next = {
            let current = self.inner.state.borrow();
            self.inner.reducer.reduce(&current, &action)
        };
        *self.inner.state.borrow_mut() = next;

        let listeners = self.inner.listeners.borrow().snapshot();
        tracing::debug!(
            action = action.name(),
            listeners = listeners.len(),
            "dispatched action"
        );

        for (id, listener) in listeners {
            let active = self.inner.listeners.borrow().contains(id);
            if active {
                listener();
            }
        }
    }

    /// Register a listener to run after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.inner.listeners.borrow_mut().add(Rc::new(listener));
        Subscription::new(id, &self.inner.listeners)
    }

    /// Copy of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without copying it.
    ///
    /// `f` must not dispatch to this store.
    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.inner.state.borrow())
    }

    /// The reducer driving this store.
    pub fn reducer(&self) -> &R {
        &self.inner.reducer
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Non-owning handle, for listeners that need to read the store they
    /// are subscribed to without keeping it alive.
    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Serialize + DeserializeOwned,
{
    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot<R::State> {
        Snapshot::new(self.state())
    }

    /// Rebuild a store from a snapshot. No seeding dispatch is performed.
    pub fn restore(reducer: R, snapshot: Snapshot<R::State>) -> Self {
        tracing::info!(
            snapshot = %snapshot.id,
            taken_at = %snapshot.timestamp,
            "restoring store from snapshot"
        );
        Self::from_state(reducer, snapshot.state)
    }
}

impl<R: Reducer> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Weak counterpart of [`Store`].
pub struct WeakStore<R: Reducer> {
    inner: Weak<Inner<R>>,
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R: Reducer> WeakStore<R> {
    /// Recover the store if it is still alive.
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }
}
