//! Account store operations

use std::fmt;
use crate::error::Result;
use crate::model::{labels_text_to_stored, Account, AccountFormState, RecordType, RECORD_TYPE_OPTIONS};
use crate::utils::{IdGenerator, UuidIdGenerator};
use super::events::{Listeners, StoreEvent, SubscriptionId};
use super::snapshot::AccountsSnapshot;

/// In-memory ordered collection of accounts
///
/// Operations on unknown ids are no-ops rather than errors. Every effective
/// mutation bumps [`revision`](AccountStore::revision) and is then reported
/// to subscribers.
pub struct AccountStore {
    /// Accounts in insertion order
    items: Vec<Account>,
    /// Source of ids for new accounts
    id_generator: Box<dyn IdGenerator>,
    /// Change subscribers
    listeners: Listeners,
    /// Mutation counter
    revision: u64,
}

impl AccountStore {
    /// Create an empty store with random UUID ids
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidIdGenerator))
    }

    /// Create an empty store with the given id generator
    pub fn with_id_generator(id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            items: Vec::new(),
            id_generator,
            listeners: Listeners::default(),
            revision: 0,
        }
    }

    /// All accounts in insertion order
    pub fn items(&self) -> &[Account] {
        &self.items
    }

    /// Read view of the accounts for display
    pub fn accounts(&self) -> &[Account] {
        &self.items
    }

    /// Get an account by ID
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Number of accounts held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of effective mutations so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Record types offered by forms, in display order
    pub fn record_type_options() -> &'static [RecordType] {
        &RECORD_TYPE_OPTIONS
    }

    /// Project a stored account into its form-editing shape
    pub fn stored_to_form(account: &Account) -> AccountFormState {
        account.to_form_state()
    }

    /// Append a blank local account and return its form state
    pub fn add_empty(&mut self) -> AccountFormState {
        let id = self.id_generator.next_id();
        let account = Account::empty(&id);
        let form = account.to_form_state();

        self.items.push(account);
        log::debug!("Added account {}", id);
        self.changed(StoreEvent::Added { id });

        form
    }

    /// Remove every account with the given ID
    ///
    /// Returns false, leaving the store untouched, if no account has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);

        let removed = before - self.items.len();
        if removed == 0 {
            log::debug!("Remove ignored, account not found: {}", id);
            return false;
        }

        log::debug!("Removed {} account(s) with id {}", removed, id);
        self.changed(StoreEvent::Removed { id: id.to_string() });
        true
    }

    /// Replace an account's labels, record type, login and password from a form
    ///
    /// LDAP accounts always end up with no password, whatever the form holds.
    /// Returns false, leaving the store untouched, if no account has the form's id.
    pub fn update_from_form(&mut self, state: &AccountFormState) -> bool {
        let Some(idx) = self.position(&state.id) else {
            log::debug!("Update ignored, account not found: {}", state.id);
            return false;
        };

        let password = match state.record_type {
            RecordType::Ldap => None,
            RecordType::Local => Some(state.password.clone()),
        };

        let account = &mut self.items[idx];
        account.labels = labels_text_to_stored(&state.labels_text);
        account.record_type = state.record_type;
        account.login = state.login.clone();
        account.password = password;

        log::debug!("Updated account {} ({})", state.id, state.record_type);
        self.changed(StoreEvent::Updated { id: state.id.clone() });
        true
    }

    /// Form state of an account, or `None` if there is no such account
    pub fn get_form_state(&self, id: &str) -> Option<AccountFormState> {
        self.get(id).map(Self::stored_to_form)
    }

    /// Copy of the whole collection for the persistence collaborator
    pub fn snapshot(&self) -> AccountsSnapshot {
        AccountsSnapshot::new(self.items.clone())
    }

    /// Replace the whole collection with a snapshot's contents
    ///
    /// A snapshot from a newer format is rejected and the store is left as it was.
    pub fn restore(&mut self, snapshot: AccountsSnapshot) -> Result<()> {
        snapshot.check_version()?;

        self.items = snapshot.into_normalized_items();
        let count = self.items.len();
        log::info!("Restored {} accounts from snapshot", count);
        self.changed(StoreEvent::Restored { count });
        Ok(())
    }

    /// Register a change listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Remove a change listener, returning false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    fn changed(&mut self, event: StoreEvent) {
        self.revision += 1;
        self.listeners.emit(&event);
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountStore")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
