//! Account collection store
//!
//! Owns the ordered list of accounts, notifies subscribers after each
//! change and exchanges its contents with persistence as snapshots.

mod accounts;
mod events;
mod snapshot;

pub use accounts::AccountStore;
pub use events::{StoreEvent, SubscriptionId};
pub use snapshot::AccountsSnapshot;
