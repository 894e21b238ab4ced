//! The state container.
//!
//! `Store` is the single writer over an [`AppState`]: the application root
//! owns one and hands `&Store` (reads) or `&mut Store` (dispatch) to the
//! view layers. Subscribers registered here stand in for the UI
//! re-render notification of the original reactive store.

use tracing::trace;

use crate::{AppState, StoreOp};

type Subscriber = Box<dyn FnMut(&AppState) + Send>;

/// Owns the state and notifies subscribers after every dispatched
/// operation.
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot. Collections are read-only to callers; every
    /// mutation goes through [`Store::dispatch`].
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a callback invoked after each dispatch with the new
    /// snapshot.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply one operation, then notify subscribers.
    ///
    /// Runs to completion on the calling thread; subscribers always
    /// observe a complete post-transition snapshot.
    pub fn dispatch(&mut self, op: StoreOp) {
        trace!(?op, "dispatch");
        self.state.apply(op);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
