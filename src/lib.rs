//! # ecofinds-web
//!
//! Leptos + WASM browser client for the EcoFinds marketplace.
//!
//! This crate owns the client-side session store, the navigation guard and
//! route table, the translation service, and the startup sequence that wires
//! them together before the view tree is mounted. Browser glue (session
//! storage, HTTP, timers, mounting) compiles under the `csr` feature; the rest
//! builds and tests natively.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install logging, run the startup sequence, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::ClientConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("invalid build config, using defaults: {e}");
    }

    leptos::task::spawn_local(async move {
        let backend = net::api::HttpBackend::new(&config.backend_url);
        let deadline = gloo_timers::future::TimeoutFuture::new(config.translation_timeout_ms);
        let booted = bootstrap::bootstrap(util::storage::BrowserSessionStorage, &backend, &config, deadline).await;

        log::info!(
            "mounting app (authenticated: {}, language: {})",
            booted.store.snapshot().is_authenticated(),
            booted.translations.current_language()
        );
        leptos::mount::mount_to_body(move || {
            view! { <app::App store=booted.store translations=booted.translations backend/> }
        });
    });
}
