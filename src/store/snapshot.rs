//! Snapshot format exchanged with the persistence collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::{AccountsError, Result};
use crate::model::Account;
use crate::SNAPSHOT_VERSION;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Full copy of the store contents
///
/// `version` and `savedAt` may be missing, so a bare `{"items": [...]}`
/// blob loads as a version 1 snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSnapshot {
    /// Snapshot format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Time the snapshot was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    /// Accounts in store order
    #[serde(default)]
    pub items: Vec<Account>,
}

impl AccountsSnapshot {
    /// Create a snapshot of the given accounts stamped with the current time
    pub fn new(items: Vec<Account>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Some(Utc::now()),
            items,
        }
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check if this build can restore the snapshot
    pub fn is_compatible(&self) -> bool {
        self.version <= SNAPSHOT_VERSION
    }

    /// Fail if the snapshot was written by a newer format
    pub fn check_version(&self) -> Result<()> {
        if self.is_compatible() {
            Ok(())
        } else {
            Err(AccountsError::UnsupportedVersion(self.version))
        }
    }

    /// Accounts ready to be held by a store
    ///
    /// Accounts are kept as loaded, in order; LDAP accounts lose any password.
    pub(crate) fn into_normalized_items(self) -> Vec<Account> {
        self.items
            .into_iter()
            .map(|mut account| {
                if account.is_ldap() && account.password.is_some() {
                    log::warn!("Clearing stored password of LDAP account: {}", account.id);
                    account.password = None;
                }
                account
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Label, RecordType};

    fn account(id: &str, record_type: RecordType, password: Option<&str>) -> Account {
        Account {
            id: id.to_string(),
            labels: vec![Label::new("tag")],
            record_type,
            login: format!("{}-login", id),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = AccountsSnapshot::new(vec![
            account("a", RecordType::Local, Some("pw")),
            account("b", RecordType::Ldap, None),
        ]);
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"recordType\":\"LDAP\""));

        let decoded = AccountsSnapshot::from_json(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_legacy_blob() {
        let json = r#"{"items":[{"id":"x1","labels":[{"text":"a"}],"recordType":"Локальная","login":"l","password":"p"}]}"#;
        let snapshot = AccountsSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.version, 1);
        assert_eq!(snapshot.saved_at, None);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].record_type, RecordType::Local);
        assert_eq!(snapshot.items[0].password.as_deref(), Some("p"));
    }

    #[test]
    fn test_malformed_json() {
        match AccountsSnapshot::from_json("[1, 2") {
            Err(AccountsError::Snapshot(_)) => {}
            other => panic!("Expected Snapshot error, got {:?}", other),
        }
        assert!(AccountsSnapshot::from_json(r#"{"items":[{"id":"x","recordType":"Other"}]}"#).is_err());
    }

    #[test]
    fn test_version_check() {
        let mut snapshot = AccountsSnapshot::new(Vec::new());
        assert!(snapshot.check_version().is_ok());

        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(!snapshot.is_compatible());
        match snapshot.check_version() {
            Err(AccountsError::UnsupportedVersion(v)) => assert_eq!(v, SNAPSHOT_VERSION + 1),
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_normalization() {
        let snapshot = AccountsSnapshot::new(vec![
            account("a", RecordType::Ldap, Some("leaked")),
            account("b", RecordType::Local, Some("kept")),
            account("a", RecordType::Local, Some("dup")),
        ]);
        let items = snapshot.into_normalized_items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[0].password, None);
        assert_eq!(items[1].password.as_deref(), Some("kept"));
        assert_eq!(items[2].id, "a");
        assert_eq!(items[2].password.as_deref(), Some("dup"));
    }
}
