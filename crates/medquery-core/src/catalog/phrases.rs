//! Compound phrase substitution table.

use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use super::{CatalogError, CatalogResult};

/// Ordered `phrase -> replacement` table.
///
/// Replacement is raw substring substitution applied in insertion order, each
/// entry operating on the output of the previous one. Partial words are not
/// protected: a "pain" entry also rewrites "painting".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundPhraseTable {
    entries: IndexMap<String, String>,
}

impl CompoundPhraseTable {
    /// Build from ordered pairs. Later duplicates overwrite the replacement
    /// but keep the first position.
    pub fn from_pairs<I, K, V>(pairs: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: IndexMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_map(entries)
    }

    /// Parse a flat JSON object, keeping document order.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let entries: IndexMap<String, String> = serde_json::from_str(json)?;
        let table = Self::from_map(entries)?;
        info!(phrases = table.len(), "Compound phrase table loaded");
        Ok(table)
    }

    /// Load a flat JSON object from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn from_map(entries: IndexMap<String, String>) -> CatalogResult<Self> {
        if entries.keys().any(|k| k.is_empty()) {
            return Err(CatalogError::InvalidPhrase(
                "phrase keys must be non-empty".into(),
            ));
        }
        Ok(Self { entries })
    }

    /// Rewrite every known phrase in `text`, sequentially.
    pub fn apply(&self, text: &str) -> String {
        let mut working = text.to_string();
        for (phrase, normalized) in &self.entries {
            if working.contains(phrase.as_str()) {
                working = working.replace(phrase.as_str(), normalized);
            }
        }
        working
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in substitution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        let table =
            CompoundPhraseTable::from_pairs([("high blood pressure", "hypertension")]).unwrap();
        let out = table.apply("remedies for high blood pressure please");

        assert_eq!(out, "remedies for hypertension please");
        assert!(!out.contains("high blood pressure"));
    }

    #[test]
    fn test_sequential_rewrites_chain() {
        // Second entry sees the output of the first
        let table = CompoundPhraseTable::from_pairs([
            ("sore throat", "pharyngitis"),
            ("pharyngitis", "throat infection"),
        ])
        .unwrap();
        assert_eq!(table.apply("sore throat"), "throat infection");

        // Reversed order: the first entry never matches the original text
        let reversed = CompoundPhraseTable::from_pairs([
            ("pharyngitis", "throat infection"),
            ("sore throat", "pharyngitis"),
        ])
        .unwrap();
        assert_eq!(reversed.apply("sore throat"), "pharyngitis");
    }

    #[test]
    fn test_partial_words_are_rewritten() {
        let table = CompoundPhraseTable::from_pairs([("pain", "ache")]).unwrap();
        assert_eq!(table.apply("painting"), "acheting");
    }

    #[test]
    fn test_case_sensitive_match() {
        let table =
            CompoundPhraseTable::from_pairs([("high blood pressure", "hypertension")]).unwrap();
        assert_eq!(table.apply("High Blood Pressure"), "High Blood Pressure");
    }

    #[test]
    fn test_json_preserves_order() {
        let table = CompoundPhraseTable::from_json_str(
            r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#,
        )
        .unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = CompoundPhraseTable::from_json_str(r#"{"": "x"}"#);
        assert!(matches!(result, Err(CatalogError::InvalidPhrase(_))));
    }

    #[test]
    fn test_non_string_value_rejected() {
        let result = CompoundPhraseTable::from_json_str(r#"{"a": 1}"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
