//! Label text conversion
//!
//! Forms edit labels as one `;`-separated string. Cleaning happens only on
//! the way in: text is split, trimmed and emptied pieces dropped, while
//! stored labels are joined back verbatim.

use crate::{LABELS_JOINER, LABELS_SEPARATOR};
use super::types::Label;

/// Split form labels text into stored labels
pub fn labels_text_to_stored(text: &str) -> Vec<Label> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    text.split(LABELS_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Label::new)
        .collect()
}

/// Join stored labels into form labels text
pub fn labels_stored_to_text(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(LABELS_JOINER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(labels: &[Label]) -> Vec<&str> {
        labels.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_text_to_stored() {
        assert_eq!(texts(&labels_text_to_stored("a; b ;  ; c")), vec!["a", "b", "c"]);
        assert_eq!(texts(&labels_text_to_stored("single")), vec!["single"]);
        assert_eq!(texts(&labels_text_to_stored(";;x;;")), vec!["x"]);
    }

    #[test]
    fn test_text_to_stored_empty() {
        assert!(labels_text_to_stored("").is_empty());
        assert!(labels_text_to_stored("   \t ").is_empty());
        assert!(labels_text_to_stored(" ; ;").is_empty());
    }

    #[test]
    fn test_text_to_stored_keeps_inner_spaces() {
        assert_eq!(texts(&labels_text_to_stored(" team lead ;ops")), vec!["team lead", "ops"]);
    }

    #[test]
    fn test_stored_to_text() {
        assert_eq!(labels_stored_to_text(&[]), "");
        assert_eq!(labels_stored_to_text(&[Label::new("a")]), "a");
        assert_eq!(labels_stored_to_text(&[Label::new("a"), Label::new("b")]), "a; b");
    }

    #[test]
    fn test_stored_to_text_is_verbatim() {
        // Stored texts are neither trimmed nor filtered
        let labels = vec![Label::new(" a "), Label::new(""), Label::new("b")];
        assert_eq!(labels_stored_to_text(&labels), " a ; ; b");
    }

    #[test]
    fn test_text_round_trip_is_idempotent() {
        for input in ["a; b ;  ; c", "", " ;x", "one", "a;b;c", "  spaced  ;  out  "] {
            let once = labels_stored_to_text(&labels_text_to_stored(input));
            let twice = labels_stored_to_text(&labels_text_to_stored(&once));
            assert_eq!(once, twice, "input {:?}", input);
        }
        assert_eq!(labels_stored_to_text(&labels_text_to_stored("a;b ; ;c ")), "a; b; c");
    }

    #[test]
    fn test_clean_labels_round_trip() {
        let labels = vec![Label::new("work"), Label::new("vpn access"), Label::new("x")];
        let text = labels_stored_to_text(&labels);
        assert_eq!(labels_text_to_stored(&text), labels);
    }
}
