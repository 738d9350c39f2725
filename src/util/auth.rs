//! Shared auth actions for components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, logout, and the navbar all drive the session store the same way;
//! these helpers keep the signal plumbing in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, Backend, HttpBackend};
use crate::net::types::Session;
use crate::state::AppSessionStore;

/// Refresh the current user's profile in the background. No-op when logged out.
pub fn spawn_profile_fetch(store: RwSignal<AppSessionStore>, backend: HttpBackend) {
    let Some(request) = store.try_update(AppSessionStore::begin_profile_fetch).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = backend.fetch_user(&request.session).await;
        store.update(|s| {
            s.finish_profile_fetch(&request, result);
        });
    });
}

/// Record a fresh session and start loading its profile.
pub fn complete_login(store: RwSignal<AppSessionStore>, backend: HttpBackend, session: Session) {
    store.update(|s| s.login(session));
    spawn_profile_fetch(store, backend);
}

/// Trim and require both login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing text for a failed login.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { message, .. } => message.clone(),
        ApiError::Transport(_) | ApiError::Unavailable => "Unable to reach the server. Try again later.".to_owned(),
        ApiError::Decode(_) => "Unexpected response from the server.".to_owned(),
    }
}
