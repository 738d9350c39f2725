//! Top navigation with session-aware links and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::use_translate;
use crate::routing::table::LOGIN_PATH;
use crate::state::AppSessionStore;
use crate::state::session::SessionSnapshot;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::toast::show_toast;

/// Toast text shown after logging out.
pub const LOGGED_OUT_KEY: &str = "logged_out";

/// Role-scoped dashboard for the signed-in user.
pub fn dashboard_path(snapshot: &SessionSnapshot) -> Option<String> {
    let session = snapshot.session.as_ref()?;
    let scope = if session.role.eq_ignore_ascii_case("admin") { "admin" } else { "user" };
    Some(format!("/{scope}/{}/dashboard", session.id))
}

/// Cart path for the signed-in user.
pub fn cart_path(snapshot: &SessionSnapshot) -> Option<String> {
    snapshot.user_id().map(|id| format!("/user/{id}/cart"))
}

/// Greeting label: profile display name, else the session email.
pub fn account_label(snapshot: &SessionSnapshot) -> Option<String> {
    snapshot
        .profile
        .as_ref()
        .and_then(|p| p.display_name())
        .or_else(|| snapshot.user_email())
        .map(str::to_owned)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<RwSignal<AppSessionStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let t = use_translate();

    let authenticated = move || store.with(|s| s.snapshot().is_authenticated());
    let dashboard = move || store.with(|s| dashboard_path(s.snapshot())).unwrap_or_default();
    let cart = move || store.with(|s| cart_path(s.snapshot())).unwrap_or_default();
    let account = move || store.with(|s| account_label(s.snapshot())).unwrap_or_default();

    let navigate = use_navigate();
    let logout = Callback::new(move |()| {
        store.update(|s| s.logout());
        show_toast(toasts, t(LOGGED_OUT_KEY), ToastKind::Success);
        navigate(LOGIN_PATH, NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"EcoFinds"</a>
            <a href="/">{move || t("home")}</a>
            <a href="/products">{move || t("browse")}</a>
            <a href="/about">{move || t("about")}</a>
            <span class="navbar__spacer"></span>
            <Show
                when=authenticated
                fallback=move || {
                    view! {
                        <a href="/login">{move || t("login")}</a>
                        <a href="/signup">{move || t("signup")}</a>
                    }
                }
            >
                <a href="/notifications">{move || t("notifications")}</a>
                <a href="/chats">{move || t("messages")}</a>
                <a href=cart>{move || t("cart")}</a>
                <a href=dashboard>{move || t("dashboard")}</a>
                <span class="navbar__account">{account}</span>
                <button class="btn navbar__logout" on:click=move |_| logout.run(())>
                    {move || t("logout")}
                </button>
            </Show>
        </nav>
    }
}
