//! # Localization
//!
//! A [`Translator`] holds the active [`Language`] and resolves text keys
//! against the built-in tables. Missing keys resolve to the key itself so a
//! gap in a table shows up as a readable identifier instead of an empty label.
//!
//! Components that cache translated text can register a listener with
//! [`Translator::subscribe`] and are called after every language change.
//! Persisting the choice is the caller's job; the language command stores it
//! in [`crate::config::RosterConfig`].

use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod translations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            other => Err(RosterError::UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Language)>;

pub struct Translator {
    language: Language,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves `key` in the active language, falling back to the key.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translations::lookup(self.language, key).unwrap_or(key)
    }

    /// Switches language by code. Unsupported codes are rejected and leave
    /// the current language in place.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        let language = code.parse()?;
        self.set_language(language);
        Ok(())
    }

    /// Switches language and notifies every listener, even when the language
    /// did not actually change.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        tracing::info!(language = %language, "language changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(language);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}
