//! Common utility functions

/// Convert a string to asterisks (for masking passwords)
pub fn mask_string(s: &str) -> String {
    "*".repeat(s.chars().count())
}

/// Mask an optional password for diagnostic output
pub fn mask_password(password: Option<&str>) -> String {
    match password {
        Some(p) => format!("Some({:?})", mask_string(p)),
        None => "None".to_string(),
    }
}
