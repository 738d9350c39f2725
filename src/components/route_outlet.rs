//! Routing outlet: resolve the location, run the guard, render or redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path is routed here. The guard decision is computed before the page
//! component is built, so a denied target is never instantiated. The guard
//! reruns on navigation and on login/logout only; profile updates do not
//! rebuild the page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::route_page::RoutePage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::routing::guard::check_intent;
use crate::routing::table::{LOGIN_ROUTE, NOT_FOUND_ROUTE, RouteIntent, UNAUTHORIZED_ROUTE, resolve};
use crate::state::AppSessionStore;

fn render_route(intent: RouteIntent) -> AnyView {
    match intent.name {
        LOGIN_ROUTE => view! { <LoginPage/> }.into_any(),
        UNAUTHORIZED_ROUTE => view! { <UnauthorizedPage/> }.into_any(),
        NOT_FOUND_ROUTE => view! { <NotFoundPage/> }.into_any(),
        _ => view! { <RoutePage intent/> }.into_any(),
    }
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let store = expect_context::<RwSignal<AppSessionStore>>();
    let location = use_location();
    let authenticated = Memo::new(move |_| store.with(|s| s.snapshot().is_authenticated()));

    move || {
        authenticated.track();
        let intent = resolve(&location.pathname.get());
        let decision = store.with_untracked(|s| check_intent(&intent, s.snapshot()));
        match decision.redirect_path() {
            Some(path) => view! { <Redirect path=path/> }.into_any(),
            None => render_route(intent),
        }
    }
}
