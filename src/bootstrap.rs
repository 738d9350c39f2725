//! Startup sequence.
//!
//! ARCHITECTURE
//! ============
//! One deterministic order: rehydrate the session store, pick a language,
//! load translations bounded by a deadline, then hand the constructed state to
//! the caller for mounting. A failed or slow translation load degrades to the
//! built-in English dictionary and never aborts startup.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use crate::config::ClientConfig;
use crate::i18n::translation::TranslationService;
use crate::net::api::Backend;
use crate::state::session::{SessionSnapshot, SessionStore};
use crate::util::storage::SessionStorage;

/// State produced by [`bootstrap`], ready to be provided to the view tree.
#[derive(Debug)]
pub struct Bootstrapped<S> {
    pub store: SessionStore<S>,
    pub translations: TranslationService,
}

/// Profile `preferred_language`, else the configured default.
#[must_use]
pub fn startup_language(snapshot: &SessionSnapshot, config: &ClientConfig) -> String {
    snapshot
        .profile
        .as_ref()
        .and_then(|p| p.preferred_language())
        .unwrap_or(config.default_language.as_str())
        .to_owned()
}

/// Run the startup sequence. `deadline` resolves when translation loading
/// should be abandoned.
pub async fn bootstrap<S, B, D>(storage: S, backend: &B, config: &ClientConfig, deadline: D) -> Bootstrapped<S>
where
    S: SessionStorage,
    B: Backend + ?Sized,
    D: Future<Output = ()>,
{
    let store = SessionStore::rehydrate(storage);
    let lang = startup_language(store.snapshot(), config);

    let mut translations = TranslationService::default();
    let fetch = backend.fetch_translations(&lang);
    match select(fetch, pin!(deadline)).await {
        Either::Left((result, _)) => {
            translations.apply_result(&lang, result);
        }
        Either::Right(((), _)) => {
            translations.use_fallback(&format!(
                "loading {lang} timed out after {} ms",
                config.translation_timeout_ms
            ));
        }
    }

    Bootstrapped { store, translations }
}
