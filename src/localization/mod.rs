//! Localized record type names and form messages
//!
//! Dictionaries are embedded at compile time and must define every
//! string, so a loaded [`Translations`] never falls back to keys.

use serde::Deserialize;
use crate::error::{AccountsError, Result};
use crate::model::RecordType;
use crate::DEFAULT_LANGUAGE;

/// Language codes with an embedded dictionary
pub const LANGUAGE_CODES: &[&str] = &["en", "ru"];

fn dictionary_json(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(include_str!("languages/en.json")),
        "ru" => Some(include_str!("languages/ru.json")),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
struct Dictionary {
    record_type_local: String,
    record_type_ldap: String,
    validation_required: String,
    /// Contains a `{max}` placeholder
    validation_too_long: String,
}

/// Display strings for one language
#[derive(Debug, Clone)]
pub struct Translations {
    lang: &'static str,
    dictionary: Dictionary,
}

impl Translations {
    /// Translations in the default language
    pub fn new() -> Result<Self> {
        Self::for_language(DEFAULT_LANGUAGE)
    }

    /// Translations for a language code from [`LANGUAGE_CODES`]
    pub fn for_language(lang: &str) -> Result<Self> {
        let (lang, json) = LANGUAGE_CODES
            .iter()
            .find(|code| **code == lang)
            .and_then(|code| dictionary_json(code).map(|json| (*code, json)))
            .ok_or_else(|| AccountsError::Localization(
                format!("Language '{}' is not supported", lang)
            ))?;

        let dictionary = serde_json::from_str(json)
            .map_err(|e| AccountsError::Localization(
                format!("Invalid dictionary for '{}': {}", lang, e)
            ))?;

        Ok(Self { lang, dictionary })
    }

    /// Language code of these translations
    pub fn language(&self) -> &str {
        self.lang
    }

    /// Display name of a record type
    pub fn record_type(&self, record_type: RecordType) -> &str {
        match record_type {
            RecordType::Local => &self.dictionary.record_type_local,
            RecordType::Ldap => &self.dictionary.record_type_ldap,
        }
    }

    /// Message for an empty required field
    pub fn required(&self) -> &str {
        &self.dictionary.validation_required
    }

    /// Message for a field longer than `max` characters
    pub fn too_long(&self, max: usize) -> String {
        self.dictionary.validation_too_long.replace("{max}", &max.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let tr = Translations::new().unwrap();
        assert_eq!(tr.language(), "en");
        assert_eq!(tr.required(), "This field is required");
        assert_eq!(tr.too_long(50), "Maximum length is 50 characters");
    }

    #[test]
    fn test_record_type_names() {
        let tr = Translations::new().unwrap();
        assert_eq!(tr.record_type(RecordType::Local), "Local");
        assert_eq!(tr.record_type(RecordType::Ldap), "LDAP");

        let tr = Translations::for_language("ru").unwrap();
        assert_eq!(tr.language(), "ru");
        assert_eq!(tr.record_type(RecordType::Local), "Локальная");
        assert_eq!(tr.record_type(RecordType::Ldap), "LDAP");
        assert_eq!(tr.too_long(100), "Максимальная длина 100 символов");
    }

    #[test]
    fn test_unsupported_language() {
        match Translations::for_language("xx") {
            Err(AccountsError::Localization(msg)) => assert!(msg.contains("xx")),
            other => panic!("Expected Localization error, got {:?}", other),
        }
    }

    #[test]
    fn test_every_dictionary_loads() {
        for code in LANGUAGE_CODES {
            let tr = Translations::for_language(code).unwrap();
            assert!(tr.too_long(7).contains('7'), "{} lacks {{max}}", code);
        }
    }
}
