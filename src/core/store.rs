//! The store: owns the current state and applies actions in dispatch order.
//!
//! Dispatchers run on the tokio runtime and queue their actions into an
//! `mpsc` channel; the composition root drains that channel into the store.
//! Because draining is single-threaded and `update` is synchronous, actions
//! land in exactly the order they were dispatched.

use std::sync::mpsc::Receiver;

use log::debug;

use crate::core::action::{Action, update};
use crate::core::state::AppState;

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Holds the state tree and the view-binding subscribers.
///
/// Constructed once and owned by the composition root — there is no hidden
/// global store.
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            subscribers: Vec::new(),
        }
    }

    /// The current state. Callers that need a stable snapshot clone it;
    /// the clone stays valid across later dispatches.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registers a callback invoked with the new state after every dispatch.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Folds one action into the state and notifies subscribers.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch: {action:?}");
        self.state = update(&self.state, &action);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Applies every queued action, in order, without blocking.
    pub fn drain(&mut self, rx: &Receiver<Action>) {
        while let Ok(action) = rx.try_recv() {
            self.dispatch(action);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
