//! # Account Store
//!
//! An in-memory store of account records (login/password entries with
//! labels and a record type) for form-driven applications.
//!
//! ## Features
//!
//! - Stored and form-editing shapes of an account, with label text conversion
//! - Ordered account collection with create, remove, update and form lookup
//! - Change notification for presentation layers
//! - Versioned JSON snapshots for an external persistence collaborator
//! - Advisory form validation and localized record type names
//!
//! ## Example
//!
//! ```
//! use account_store::{AccountStore, RecordType};
//!
//! let mut store = AccountStore::new();
//! let mut form = store.add_empty();
//! form.labels_text = "work; vpn".to_string();
//! form.login = "jdoe".to_string();
//! form.record_type = RecordType::Ldap;
//! form.password = "ignored".to_string();
//! store.update_from_form(&form);
//!
//! let account = store.get(&form.id).unwrap();
//! assert_eq!(account.labels.len(), 2);
//! assert_eq!(account.password, None);
//! ```

pub mod model;
pub mod store;
pub mod localization;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{AccountsError, Result};
pub use model::{
    Label, RecordType, Account, AccountFormState, RECORD_TYPE_OPTIONS,
    labels_text_to_stored, labels_stored_to_text,
    validate_form, FormField, FormIssue, IssueKind,
};
pub use store::{AccountStore, AccountsSnapshot, StoreEvent, SubscriptionId};
pub use localization::Translations;
pub use utils::{IdGenerator, UuidIdGenerator, SequentialIdGenerator};

/// Maximum length of the labels text field
pub const LABELS_MAX_LENGTH: usize = 50;

/// Maximum length of the login field
pub const LOGIN_MAX_LENGTH: usize = 100;

/// Maximum length of the password field
pub const PASSWORD_MAX_LENGTH: usize = 100;

/// Separator used when splitting labels text
pub const LABELS_SEPARATOR: char = ';';

/// Separator used when joining stored labels into text
pub const LABELS_JOINER: &str = "; ";

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Default language for translations
pub const DEFAULT_LANGUAGE: &str = "en";
