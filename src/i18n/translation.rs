//! Translation service: best-effort remote dictionaries with a static fallback.
//!
//! ERROR HANDLING
//! ==============
//! Loading never fails from the caller's point of view. Any transport, status,
//! or decode error swaps in the built-in English dictionary wholesale (no
//! merging with partial results), and lookups of missing keys return the key.

#[cfg(test)]
#[path = "translation_test.rs"]
mod translation_test;

use super::fallback::FALLBACK_EN;
use crate::net::api::{ApiError, Backend};
use crate::net::types::Translations;

pub const FALLBACK_LANGUAGE: &str = "en";

/// The built-in English mapping.
#[must_use]
pub fn fallback_translations() -> Translations {
    FALLBACK_EN
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationService {
    translations: Translations,
    current_language: String,
}

impl Default for TranslationService {
    fn default() -> Self {
        Self { translations: Translations::new(), current_language: FALLBACK_LANGUAGE.to_owned() }
    }
}

impl TranslationService {
    /// Load `lang` from the backend and make it active, or fall back to the
    /// built-in English mapping. Returns the now-active mapping.
    pub async fn load_translations<B: Backend + ?Sized>(&mut self, backend: &B, lang: &str) -> &Translations {
        let result = backend.fetch_translations(lang).await;
        self.apply_result(lang, result)
    }

    /// Install the outcome of a translation fetch.
    pub fn apply_result(&mut self, lang: &str, result: Result<Translations, ApiError>) -> &Translations {
        match result {
            Ok(translations) => {
                log::debug!("loaded {} translations for {lang}", translations.len());
                self.translations = translations;
                self.current_language = lang.to_owned();
            }
            Err(e) => self.use_fallback(&format!("loading {lang}: {e}")),
        }
        &self.translations
    }

    /// Replace the active mapping with the built-in English one.
    pub fn use_fallback(&mut self, reason: &str) {
        log::error!("error loading translations ({reason}), using built-in English");
        self.translations = fallback_translations();
        self.current_language = FALLBACK_LANGUAGE.to_owned();
    }

    /// Active text for `key`, or `key` itself when absent or empty.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .unwrap_or(key)
    }

    /// Owned form of [`Self::translate`].
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translate(key).to_owned()
    }

    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    #[must_use]
    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}
