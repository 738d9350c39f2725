use super::*;
use crate::i18n::translation::fallback_translations;
use crate::net::test_helpers::{MockBackend, profile, session};
use crate::state::session::{AUTH_DATA_KEY, USER_DATA_KEY};
use crate::util::storage::{MemoryStorage, save_json};

fn storage_with_profile(json: serde_json::Value) -> MemoryStorage {
    let storage = MemoryStorage::new();
    save_json(&storage, AUTH_DATA_KEY, &session(5, "user")).unwrap();
    save_json(&storage, USER_DATA_KEY, &profile(json)).unwrap();
    storage
}

#[test]
fn startup_language_prefers_profile() {
    let config = ClientConfig::default();
    let mut snapshot = SessionSnapshot::default();
    assert_eq!(startup_language(&snapshot, &config), "en");

    snapshot.profile = Some(profile(serde_json::json!({"preferred_language": "fr"})));
    assert_eq!(startup_language(&snapshot, &config), "fr");
}

#[tokio::test]
async fn bootstrap_rehydrates_and_loads_preferred_language() {
    let backend = MockBackend::with_translations("fr", &[("cart", "Panier")]);
    let storage = storage_with_profile(serde_json::json!({"preferred_language": "fr"}));

    let booted = bootstrap(storage, &backend, &ClientConfig::default(), futures::future::pending()).await;

    assert_eq!(booted.store.snapshot().session, Some(session(5, "user")));
    assert_eq!(booted.translations.current_language(), "fr");
    assert_eq!(booted.translations.t("cart"), "Panier");
    assert_eq!(backend.calls(), vec!["translations fr".to_owned()]);
}

#[tokio::test]
async fn bootstrap_without_session_uses_config_language() {
    let backend = MockBackend::with_translations("de", &[("cart", "Warenkorb")]);
    let config = ClientConfig { default_language: "de".to_owned(), ..ClientConfig::default() };

    let booted = bootstrap(MemoryStorage::new(), &backend, &config, futures::future::pending()).await;

    assert!(!booted.store.snapshot().is_authenticated());
    assert_eq!(booted.translations.t("cart"), "Warenkorb");
}

#[tokio::test]
async fn bootstrap_translation_failure_still_completes() {
    let backend = MockBackend::default();
    let booted = bootstrap(MemoryStorage::new(), &backend, &ClientConfig::default(), futures::future::pending()).await;
    assert_eq!(booted.translations.translations(), &fallback_translations());
}

#[tokio::test]
async fn bootstrap_times_out_to_fallback() {
    let backend = MockBackend {
        hang_translations: true,
        ..MockBackend::with_translations("en", &[("cart", "Basket")])
    };

    let booted = bootstrap(MemoryStorage::new(), &backend, &ClientConfig::default(), futures::future::ready(())).await;

    assert_eq!(booted.translations.t("cart"), "Cart");
    assert_eq!(booted.translations.current_language(), "en");
}
