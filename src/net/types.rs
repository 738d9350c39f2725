//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! `Session` mirrors the login response exactly so it can be persisted to and
//! rehydrated from session storage without translation. `UserProfile` is kept
//! as an open JSON object because the backend owns its shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flat `key -> display string` mapping for one language.
pub type Translations = HashMap<String, String>;

/// Authenticated identity returned by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque auth token sent verbatim in the `Authorization` header.
    pub token: String,
    /// Backend user identifier.
    pub id: i64,
    /// Role label (e.g. `"user"`, `"admin"`). Compared case-sensitively.
    pub role: String,
    pub email: String,
}

/// Server-supplied user record. Replaced wholesale on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub serde_json::Map<String, serde_json::Value>);

impl UserProfile {
    /// Raw field access.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    /// Non-empty `preferred_language` field, if present.
    #[must_use]
    pub fn preferred_language(&self) -> Option<&str> {
        self.string_field("preferred_language")
    }

    /// `full_name`, falling back to `username`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.string_field("full_name").or_else(|| self.string_field("username"))
    }

    fn string_field(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
