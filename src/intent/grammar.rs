use std::collections::BTreeMap;

use super::error::ConfigError;
use super::window::is_printable;

/// Built-in phrases and the actions they name.
pub const DEFAULT_PHRASES: [(&str, &str); 4] = [
    ("dd", "delete"),
    ("cc", "clone"),
    ("wr", "wrap"),
    ("ii", "insert"),
];

/// Immutable mapping from literal phrase to action name.
///
/// Lookups are exact and case-sensitive: `"ddd"` never matches `"dd"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseGrammar {
    phrases: BTreeMap<String, String>,
}

impl PhraseGrammar {
    /// Build a grammar, rejecting entries the recognizer could never match.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the grammar is empty, a phrase is empty
    /// or contains a character outside printable ASCII, or an action name
    /// is empty.
    pub fn new<I, P, A>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: Into<String>,
    {
        let mut phrases = BTreeMap::new();
        for (phrase, action) in entries {
            let phrase = phrase.into();
            let action = action.into();
            if phrase.is_empty() {
                return Err(ConfigError::EmptyPhrase);
            }
            if !phrase.bytes().all(|b| is_printable(u32::from(b))) {
                return Err(ConfigError::NonPrintablePhrase(phrase));
            }
            if action.trim().is_empty() {
                return Err(ConfigError::EmptyAction(phrase));
            }
            phrases.insert(phrase, action);
        }
        if phrases.is_empty() {
            return Err(ConfigError::EmptyGrammar);
        }
        Ok(Self { phrases })
    }

    /// Action name for an exact phrase match.
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.phrases.get(phrase).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Entries in phrase order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.phrases
            .iter()
            .map(|(phrase, action)| (phrase.as_str(), action.as_str()))
    }
}

impl Default for PhraseGrammar {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES
                .iter()
                .map(|(phrase, action)| ((*phrase).to_string(), (*action).to_string()))
                .collect(),
        }
    }
}
