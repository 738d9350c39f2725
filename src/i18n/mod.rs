//! Internationalization: translation loading and key lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active [`translation::TranslationService`] lives in an `RwSignal`
//! context; views read it through [`use_translate`].

pub mod fallback;
pub mod translation;

use leptos::prelude::*;

use translation::TranslationService;

/// Reactive `t(key)` bound to the translation context.
pub fn use_translate() -> impl Fn(&str) -> String + Copy + Send + Sync + 'static {
    let translations = expect_context::<RwSignal<TranslationService>>();
    move |key: &str| translations.with(|t| t.t(key))
}
