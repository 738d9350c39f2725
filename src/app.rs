//! Root application component with context providers and the routing outlet.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{nav_bar::NavBar, route_outlet::RouteOutlet, toast_host::ToastHost};
use crate::i18n::translation::TranslationService;
use crate::net::api::HttpBackend;
use crate::state::AppSessionStore;
use crate::state::toast::ToastState;
use crate::util::auth::spawn_profile_fetch;

/// Root application component.
///
/// Takes the store and translations produced by startup, provides them as
/// contexts, and refreshes the profile when a session was rehydrated.
#[component]
pub fn App(store: AppSessionStore, translations: TranslationService, backend: HttpBackend) -> impl IntoView {
    provide_meta_context();

    let authenticated = store.snapshot().is_authenticated();
    let store = RwSignal::new(store);
    let translations = RwSignal::new(translations);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(store);
    provide_context(translations);
    provide_context(toasts);
    provide_context(backend.clone());

    if authenticated {
        spawn_profile_fetch(store, backend);
    }

    let lang = move || translations.with(|t| t.current_language().to_owned());

    view! {
        <Title text="EcoFinds"/>

        <Router>
            <div class="app" lang=lang>
                <NavBar/>
                <main class="app__main">
                    <RouteOutlet/>
                </main>
                <ToastHost/>
            </div>
        </Router>
    }
}
