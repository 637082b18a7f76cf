#![warn(missing_docs)]
//! # phishforge-translate
//!
//! ## Purpose
//! Rewrites Italian fragments embedded in backend free text into English, the
//! client's display language.
//!
//! ## Responsibilities
//! - Hold an ordered, immutable fragment table.
//! - Replace whole canned sentences 1:1 (exact match has priority).
//! - Replace embedded fragments in a single left-to-right pass.
//!
//! ## Data flow
//! Free text from the analysis response or a transport error ->
//! [`TranslationTable::translate`] -> display text.
//!
//! ## Ownership and lifetimes
//! Tables own their entries and are immutable after construction, so one
//! table can be shared by reference across threads.
//!
//! ## Error model
//! Translation itself cannot fail. Only building a custom table validates
//! its entries and returns [`TranslateError`].
//!
//! ## Example
//! ```rust
//! use phishforge_translate::TranslationTable;
//!
//! let table = TranslationTable::builtin();
//! assert_eq!(table.translate("Link sospetto rilevato"), "Suspicious link rilevato");
//! ```

mod builtin;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;

/// One source fragment and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Fragment to look for.
    pub source: String,
    /// Replacement text.
    pub target: String,
}

impl TranslationEntry {
    fn matches_between(&self, before: Option<char>, after: Option<char>) -> bool {
        let joins_word = |edge: Option<char>, neighbour: Option<char>| {
            edge.is_some_and(char::is_alphanumeric) && neighbour.is_some_and(char::is_alphanumeric)
        };
        !joins_word(self.source.chars().next(), before)
            && !joins_word(self.source.chars().next_back(), after)
    }
}

/// Ordered fragment table.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
    exact: HashMap<String, usize>,
}

impl TranslationTable {
    /// Builds a table from `(source, target)` pairs kept in the given order.
    ///
    /// # Errors
    /// Returns [`TranslateError::EmptySource`] when a source fragment is empty.
    /// Returns [`TranslateError::DuplicateSource`] when a source fragment is
    /// listed twice.
    pub fn new<S, T>(pairs: impl IntoIterator<Item = (S, T)>) -> Result<Self, TranslateError>
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::default();
        for (index, (source, target)) in pairs.into_iter().enumerate() {
            let source = source.into();
            if source.is_empty() {
                return Err(TranslateError::EmptySource { index });
            }
            if table.exact.contains_key(&source) {
                return Err(TranslateError::DuplicateSource(source));
            }
            table.push(source, target.into());
        }
        Ok(table)
    }

    /// Returns the shared built-in Italian to English table.
    pub fn builtin() -> &'static TranslationTable {
        static BUILTIN: OnceLock<TranslationTable> = OnceLock::new();
        BUILTIN.get_or_init(Self::italian_to_english)
    }

    /// Builds a fresh copy of the built-in Italian to English table.
    pub fn italian_to_english() -> Self {
        let mut table = Self::default();
        for (source, target) in builtin::ITALIAN_TO_ENGLISH {
            table.push((*source).to_string(), (*target).to_string());
        }
        table
    }

    fn push(&mut self, source: String, target: String) {
        self.exact.insert(source.clone(), self.entries.len());
        self.entries.push(TranslationEntry { source, target });
    }

    /// Translates one text value.
    ///
    /// A whole-string match returns the mapped sentence directly. Otherwise
    /// every position is tried against the entries in table order; the first
    /// entry whose source starts there is substituted and scanning resumes
    /// after the matched source. Substituted text is never scanned again in
    /// the same call.
    ///
    /// A source that starts or ends with a letter or digit only matches where
    /// that edge is a word boundary in the input, so `Consigliospetto` is left
    /// alone rather than becoming `Tipsospetto`.
    pub fn translate(&self, text: &str) -> String {
        if let Some(&index) = self.exact.get(text) {
            return self.entries[index].target.clone();
        }

        let mut output = String::with_capacity(text.len());
        let mut previous: Option<char> = None;
        let mut rest = text;
        'scan: while !rest.is_empty() {
            for entry in &self.entries {
                let Some(after) = rest.strip_prefix(entry.source.as_str()) else {
                    continue;
                };
                if entry.matches_between(previous, after.chars().next()) {
                    output.push_str(&entry.target);
                    previous = entry.source.chars().next_back();
                    rest = after;
                    continue 'scan;
                }
            }

            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                output.push(ch);
                previous = Some(ch);
            }
            rest = chars.as_str();
        }
        output
    }

    /// Translates a JSON value when it is a string; other values are
    /// returned unchanged.
    pub fn translate_value(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.translate(text)),
            other => other.clone(),
        }
    }

    /// Lists entries whose replacement text contains some source fragment.
    ///
    /// A table with no such entries translates idempotently.
    pub fn self_matching_entries(&self) -> Vec<&TranslationEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                self.entries
                    .iter()
                    .any(|other| entry.target.contains(other.source.as_str()))
            })
            .collect()
    }

    /// Returns entries in lookup order.
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shorthand for [`TranslationTable::builtin`]`.translate(text)`.
pub fn translate(text: &str) -> String {
    TranslationTable::builtin().translate(text)
}

/// Custom table construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// A source fragment was empty.
    #[error("translation entry {index} has an empty source fragment")]
    EmptySource {
        /// Position of the offending pair.
        index: usize,
    },
    /// The same source fragment was listed more than once.
    #[error("duplicate translation source: {0}")]
    DuplicateSource(String),
}

#[cfg(test)]
mod tests {
    //! Unit tests for lookup order and idempotence.

    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn exact_match_wins_over_fragments() {
        let table = TranslationTable::new([("Rischio alto", "whole"), ("alto", "high")])
            .expect("table should build");
        assert_eq!(table.translate("Rischio alto"), "whole");
        assert_eq!(table.translate("Rischio alto!"), "Rischio high!");
    }

    #[test]
    fn emoji_prefixed_sentence_maps_one_to_one() {
        let translated = translate("✅ Nessun indicatore di rischio rilevato.");
        assert_eq!(translated, "✅ No risk indicators detected.");
    }

    #[test]
    fn earlier_entry_wins_at_same_position() {
        let table =
            TranslationTable::new([("a b", "X"), ("a b c", "Y")]).expect("table should build");
        assert_eq!(table.translate("a b c!"), "X c!");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let table = TranslationTable::new([("a", "b"), ("b", "c")]).expect("table should build");
        assert_eq!(table.translate("a b"), "b c");
    }

    #[test]
    fn fragments_inside_words_are_left_alone() {
        let text = "Consigliospetto";
        assert_eq!(translate(text), text);
        assert_eq!(translate(&translate(text)), translate(text));
        assert_eq!(translate("insospettabile"), "insospettabile");
        assert_eq!(translate("(sospetto)"), "(suspicious)");
        assert_eq!(translate("Consigli: sospetto."), "Tips: suspicious.");
    }

    #[test]
    fn unknown_text_passes_through() {
        let text = "Bonjour, ceci n'est pas traduit - 東京";
        assert_eq!(translate(text), text);
        assert_eq!(translate(""), "");
    }

    #[test]
    fn non_string_values_are_identity() {
        let table = TranslationTable::builtin();
        assert_eq!(table.translate_value(&json!(42)), json!(42));
        assert_eq!(table.translate_value(&json!(null)), json!(null));
        assert_eq!(
            table.translate_value(&json!("Link sospetto")),
            json!("Suspicious link")
        );
    }

    #[test]
    fn rejects_empty_and_duplicate_sources() {
        assert_eq!(
            TranslationTable::new([("", "x")]).unwrap_err(),
            TranslateError::EmptySource { index: 0 }
        );
        assert_eq!(
            TranslationTable::new([("a", "x"), ("a", "y")]).unwrap_err(),
            TranslateError::DuplicateSource("a".to_string())
        );
    }

    #[test]
    fn builtin_targets_contain_no_sources() {
        let table = TranslationTable::builtin();
        assert!(!table.is_empty());
        assert!(
            table.self_matching_entries().is_empty(),
            "builtin entries re-match: {:?}",
            table.self_matching_entries()
        );
    }

    #[test]
    fn builtin_sources_translate_idempotently() {
        let table = TranslationTable::builtin();
        for entry in table.entries() {
            let once = table.translate(&entry.source);
            assert_eq!(table.translate(&once), once, "entry {:?}", entry.source);
        }
    }

    fn mixed_text() -> impl Strategy<Value = String> {
        let sources: Vec<String> = TranslationTable::builtin()
            .entries()
            .iter()
            .map(|entry| entry.source.clone())
            .collect();
        let fragment = prop_oneof![
            proptest::sample::select(sources),
            "[A-Za-z .,:!]{0,6}",
            "[a-z]{1,3}",
        ];
        proptest::collection::vec(fragment, 0..8).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn translation_is_idempotent(text in mixed_text()) {
            let once = translate(&text);
            prop_assert_eq!(translate(&once), once);
        }
    }
}
