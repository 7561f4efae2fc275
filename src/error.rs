//! Error types for Account Store

use thiserror::Error;

/// Main error type for account store operations
///
/// Collection operations never fail; only the snapshot boundary and
/// localization can produce errors.
#[derive(Error, Debug)]
pub enum AccountsError {
    /// Snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Snapshot was written by a newer format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// Localization error
    #[error("Localization error: {0}")]
    Localization(String),
}

impl From<serde_json::Error> for AccountsError {
    fn from(err: serde_json::Error) -> Self {
        AccountsError::Snapshot(err.to_string())
    }
}

/// Result type alias for account store operations
pub type Result<T> = std::result::Result<T, AccountsError>;
