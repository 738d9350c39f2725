//! Login page: email + password against `POST /login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::use_translate;
use crate::net::api::{Backend, HttpBackend};
use crate::state::AppSessionStore;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{complete_login, login_error_message, validate_login_input};
use crate::util::toast::show_toast;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<RwSignal<AppSessionStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let backend = expect_context::<HttpBackend>();
    let t = use_translate();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(fields) => fields,
            Err(msg) => {
                show_toast(toasts, msg, ToastKind::Error);
                return;
            }
        };
        busy.set(true);

        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = backend.login(&email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(session) => {
                    complete_login(store, backend, session);
                    show_toast(toasts, t("login_successful"), ToastKind::Success);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    show_toast(toasts, login_error_message(&e), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || t("login")}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder=move || t("email")
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder=move || t("password")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || t("login")}
                    </button>
                </form>
                <div class="login-links">
                    <a href="/forgot-password">{move || t("forgot_password")}</a>
                    <a href="/signup">{move || t("signup")}</a>
                </div>
            </div>
        </div>
    }
}
