//! Account record model
//!
//! Stored and form-editing shapes of an account, plus the pure
//! conversions between them.

pub mod types;
pub mod labels;
pub mod validation;

pub use types::{Label, RecordType, Account, AccountFormState, RECORD_TYPE_OPTIONS};
pub use labels::{labels_text_to_stored, labels_stored_to_text};
pub use validation::{validate_form, FormField, FormIssue, IssueKind};
