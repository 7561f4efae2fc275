//! Advisory form validation
//!
//! Reports problems with a form state for a presentation layer to show.
//! Nothing here rejects input; the store accepts any form state.

use serde::{Deserialize, Serialize};
use crate::localization::Translations;
use crate::{LABELS_MAX_LENGTH, LOGIN_MAX_LENGTH, PASSWORD_MAX_LENGTH};
use super::types::{AccountFormState, RecordType};

/// Editable field of an account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    LabelsText,
    Login,
    Password,
}

impl FormField {
    /// Maximum length configured for this field
    pub fn max_length(&self) -> usize {
        match self {
            FormField::LabelsText => LABELS_MAX_LENGTH,
            FormField::Login => LOGIN_MAX_LENGTH,
            FormField::Password => PASSWORD_MAX_LENGTH,
        }
    }
}

/// Kind of problem found in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueKind {
    /// Field must not be empty
    Required,
    /// Field exceeds its maximum length
    TooLong { max: usize },
}

/// Single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormIssue {
    pub field: FormField,
    pub kind: IssueKind,
}

impl FormIssue {
    /// Localized message for this issue
    pub fn message(&self, tr: &Translations) -> String {
        match self.kind {
            IssueKind::Required => tr.required().to_string(),
            IssueKind::TooLong { max } => tr.too_long(max),
        }
    }
}

/// Check a form state against field rules
///
/// Lengths are counted in characters. LDAP accounts have no password rules.
pub fn validate_form(state: &AccountFormState) -> Vec<FormIssue> {
    let mut issues = Vec::new();

    check_length(&mut issues, FormField::LabelsText, &state.labels_text);

    if state.login.trim().is_empty() {
        issues.push(FormIssue { field: FormField::Login, kind: IssueKind::Required });
    } else {
        check_length(&mut issues, FormField::Login, &state.login);
    }

    if state.record_type == RecordType::Local {
        if state.password.is_empty() {
            issues.push(FormIssue { field: FormField::Password, kind: IssueKind::Required });
        } else {
            check_length(&mut issues, FormField::Password, &state.password);
        }
    }

    issues
}

fn check_length(issues: &mut Vec<FormIssue>, field: FormField, value: &str) {
    let max = field.max_length();
    if value.chars().count() > max {
        issues.push(FormIssue { field, kind: IssueKind::TooLong { max } });
    }
}
