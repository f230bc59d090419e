//! Domain Signals
//!
//! Synchronous event dispatch. Receivers are connected at startup by extensions
//! and called in connection order whenever a domain event is sent.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::models::user::User;

type Receiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A named event dispatcher
pub struct Signal<T> {
    name: &'static str,
    receivers: RwLock<Vec<(String, Receiver<T>)>>,
}

impl<T> Signal<T> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            receivers: RwLock::new(Vec::new()),
        }
    }

    /// Connect a receiver under `dispatch_uid`
    ///
    /// Returns `false` without connecting when a receiver with the same
    /// `dispatch_uid` is already connected.
    pub fn connect<F>(&self, dispatch_uid: &str, receiver: F) -> bool
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut receivers = self.receivers.write().unwrap_or_else(PoisonError::into_inner);
        if receivers.iter().any(|(uid, _)| uid == dispatch_uid) {
            tracing::debug!(signal = self.name, dispatch_uid, "Receiver already connected");
            return false;
        }
        receivers.push((dispatch_uid.to_string(), Arc::new(receiver)));
        tracing::debug!(signal = self.name, dispatch_uid, "Receiver connected");
        true
    }

    /// Disconnect the receiver registered under `dispatch_uid`
    pub fn disconnect(&self, dispatch_uid: &str) -> bool {
        let mut receivers = self.receivers.write().unwrap_or_else(PoisonError::into_inner);
        let before = receivers.len();
        receivers.retain(|(uid, _)| uid != dispatch_uid);
        receivers.len() != before
    }

    /// Send an event to every connected receiver, returning how many ran
    pub fn send(&self, event: &T) -> usize {
        // Snapshot so receivers may connect or disconnect while being called.
        let receivers: Vec<Receiver<T>> = self
            .receivers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, receiver)| Arc::clone(receiver))
            .collect();

        for receiver in &receivers {
            receiver(event);
        }
        receivers.len()
    }

    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.receivers.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("receivers", &self.receiver_count())
            .finish()
    }
}

/// Sent after a user has been saved through an update
#[derive(Debug, Clone)]
pub struct UserUpdated {
    pub user: User,
    pub previous_username: String,
}

/// Process-wide signal hub
#[derive(Debug)]
pub struct Signals {
    pub user_updated: Signal<UserUpdated>,
}

impl Signals {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_updated: Signal::new("user_updated"),
        }
    }
}

impl Default for Signals {
    fn default() -> Self {
        Self::new()
    }
}
