//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment at runtime, so settings are baked
//! in from `ECOFINDS_*` variables when the crate is compiled. Parsing goes
//! through a lookup closure so defaults and overrides are testable natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TRANSLATION_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    /// Language used when no profile preference is known.
    pub default_language: String,
    /// Upper bound on translation loading during startup.
    pub translation_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
            translation_timeout_ms: DEFAULT_TRANSLATION_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// - `ECOFINDS_BACKEND_URL`: default `http://127.0.0.1:5000`
    /// - `ECOFINDS_DEFAULT_LANGUAGE`: default `en`
    /// - `ECOFINDS_TRANSLATION_TIMEOUT_MS`: default 5000
    /// - `ECOFINDS_LOG_LEVEL`: `error`..`trace`, default `info`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a numeric or level value fails to parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "ECOFINDS_BACKEND_URL" => option_env!("ECOFINDS_BACKEND_URL"),
            "ECOFINDS_DEFAULT_LANGUAGE" => option_env!("ECOFINDS_DEFAULT_LANGUAGE"),
            "ECOFINDS_TRANSLATION_TIMEOUT_MS" => option_env!("ECOFINDS_TRANSLATION_TIMEOUT_MS"),
            "ECOFINDS_LOG_LEVEL" => option_env!("ECOFINDS_LOG_LEVEL"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a numeric or level value fails to parse.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let get = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        let backend_url = get("ECOFINDS_BACKEND_URL")
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_owned();
        let default_language = get("ECOFINDS_DEFAULT_LANGUAGE").unwrap_or(DEFAULT_LANGUAGE).to_owned();

        let translation_timeout_ms = match get("ECOFINDS_TRANSLATION_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::Invalid {
                key: "ECOFINDS_TRANSLATION_TIMEOUT_MS",
                value: raw.to_owned(),
            })?,
            None => DEFAULT_TRANSLATION_TIMEOUT_MS,
        };

        let log_level = match get("ECOFINDS_LOG_LEVEL") {
            Some(raw) => raw
                .parse::<log::Level>()
                .map_err(|_| ConfigError::Invalid { key: "ECOFINDS_LOG_LEVEL", value: raw.to_owned() })?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self { backend_url, default_language, translation_timeout_ms, log_level })
    }
}
