//! Data models for account records

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::localization::Translations;
use crate::utils::{mask_password, mask_string};
use super::labels::labels_stored_to_text;

/// Record types in display order
pub const RECORD_TYPE_OPTIONS: [RecordType; 2] = [RecordType::Local, RecordType::Ldap];

/// Single free-text tag attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

/// Authentication source of an account
///
/// LDAP accounts never store a local password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordType {
    /// Local account; also accepts the localized value older blobs carry
    #[default]
    #[serde(rename = "Local", alias = "Локальная")]
    Local,
    /// Directory account
    #[serde(rename = "LDAP")]
    Ldap,
}

impl RecordType {
    /// Canonical value as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Local => "Local",
            RecordType::Ldap => "LDAP",
        }
    }

    /// Localized display name
    pub fn display_name<'a>(&self, tr: &'a Translations) -> &'a str {
        tr.record_type(*self)
    }

    /// Check if accounts of this type keep a local password
    pub fn stores_password(&self) -> bool {
        matches!(self, RecordType::Local)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account as held by the store and persisted in snapshots
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account ID, fixed at creation
    pub id: String,
    /// Labels in display order
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Authentication source
    pub record_type: RecordType,
    /// Login name
    #[serde(default)]
    pub login: String,
    /// Local password, always `None` for LDAP accounts
    pub password: Option<String>,
}

impl Account {
    /// Create a blank local account
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            labels: Vec::new(),
            record_type: RecordType::Local,
            login: String::new(),
            password: Some(String::new()),
        }
    }

    /// Project this account into its form-editing shape
    pub fn to_form_state(&self) -> AccountFormState {
        AccountFormState {
            id: self.id.clone(),
            labels_text: labels_stored_to_text(&self.labels),
            record_type: self.record_type,
            login: self.login.clone(),
            password: self.password.clone().unwrap_or_default(),
        }
    }

    /// Check if this is an LDAP account
    pub fn is_ldap(&self) -> bool {
        self.record_type == RecordType::Ldap
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = mask_password(self.password.as_deref());
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("labels", &self.labels)
            .field("record_type", &self.record_type)
            .field("login", &self.login)
            .field("password", &format_args!("{}", password))
            .finish()
    }
}

/// Transient editing projection of an [`Account`]
///
/// Labels are a single `; `-joined string and the password is never null.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFormState {
    pub id: String,
    pub labels_text: String,
    pub record_type: RecordType,
    pub login: String,
    pub password: String,
}

impl fmt::Debug for AccountFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = mask_string(&self.password);
        f.debug_struct("AccountFormState")
            .field("id", &self.id)
            .field("labels_text", &self.labels_text)
            .field("record_type", &self.record_type)
            .field("login", &self.login)
            .field("password", &password)
            .finish()
    }
}
