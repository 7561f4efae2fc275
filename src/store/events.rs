//! Change notification

use serde::{Deserialize, Serialize};

/// Change applied to the store, delivered after the change completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreEvent {
    /// An empty account was appended
    Added { id: String },
    /// An account was removed
    Removed { id: String },
    /// An account's fields were replaced from a form
    Updated { id: String },
    /// The whole collection was replaced from a snapshot
    Restored { count: usize },
}

impl StoreEvent {
    /// Account ID affected by this event, if it targets a single account
    pub fn account_id(&self) -> Option<&str> {
        match self {
            StoreEvent::Added { id } | StoreEvent::Removed { id } | StoreEvent::Updated { id } => Some(id.as_str()),
            StoreEvent::Restored { .. } => None,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent) + Send>;

/// Registered listeners in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
