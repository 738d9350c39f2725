//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics; the session store and the
//! translation service decide how each failure degrades.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Session, Translations, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("backend not available outside the browser")]
    Unavailable,
}

/// Async seam over the backend endpoints used by the store and translations.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait::async_trait(?Send)]
pub trait Backend {
    /// Exchange credentials for a [`Session`] via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status (carrying
    /// the backend's `message`), or an undecodable body.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// Fetch the user record for `session` via `GET /api/user/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn fetch_user(&self, session: &Session) -> Result<UserProfile, ApiError>;

    /// Fetch the translation mapping for `lang`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn fetch_translations(&self, lang: &str) -> Result<Translations, ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(base_url: &str) -> String {
    format!("{base_url}/login")
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(base_url: &str, user_id: i64) -> String {
    format!("{base_url}/api/user/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn translations_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/translations")
}

/// Query pairs for the translations request; gloo-net percent-encodes them.
#[cfg(any(test, feature = "csr"))]
fn translations_query(lang: &str) -> [(&'static str, &str); 1] {
    [("lang", lang)]
}

/// Build a status error, preferring the backend's `message`/`msg`/`error` field.
#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "msg", "error"]
                .iter()
                .find_map(|field| v.get(field).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| "request failed".to_owned());
    ApiError::Status { status, message }
}

/// HTTP implementation of [`Backend`] rooted at the configured backend origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "csr")]
async fn decode_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl Backend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::LoginRequest { email, password };
            let resp = gloo_net::http::Request::post(&login_endpoint(&self.base_url))
                .json(&payload)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_user(&self, session: &Session) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&user_endpoint(&self.base_url, session.id))
                .header("Content-Type", "application/json")
                .header("Authorization", &session.token)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_translations(&self, lang: &str) -> Result<Translations, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&translations_endpoint(&self.base_url))
                .query(translations_query(lang))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            decode_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = lang;
            Err(ApiError::Unavailable)
        }
    }
}
