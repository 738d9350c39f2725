//! Scripted [`Backend`] for store, translation, and bootstrap tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use super::api::{ApiError, Backend};
use super::types::{Session, Translations, UserProfile};

pub fn session(id: i64, role: &str) -> Session {
    Session {
        token: format!("token-{id}"),
        id,
        role: role.to_owned(),
        email: format!("user{id}@example.com"),
    }
}

pub fn profile(json: serde_json::Value) -> UserProfile {
    serde_json::from_value(json).unwrap()
}

#[derive(Default)]
pub struct MockBackend {
    pub login_results: Mutex<VecDeque<Result<Session, ApiError>>>,
    pub user_results: Mutex<VecDeque<Result<UserProfile, ApiError>>>,
    /// Languages the backend can serve. Anything else is a transport error.
    pub translations: HashMap<String, Translations>,
    /// When set, translation requests never resolve.
    pub hang_translations: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn with_user_results(results: Vec<Result<UserProfile, ApiError>>) -> Self {
        Self { user_results: Mutex::new(results.into()), ..Self::default() }
    }

    pub fn with_translations(lang: &str, pairs: &[(&str, &str)]) -> Self {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Self { translations: HashMap::from([(lang.to_owned(), map)]), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for MockBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<Session, ApiError> {
        self.calls.lock().unwrap().push(format!("login {email}"));
        self.login_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no login response queued".to_owned())))
    }

    async fn fetch_user(&self, session: &Session) -> Result<UserProfile, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("user {} auth={}", session.id, session.token));
        self.user_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no user response queued".to_owned())))
    }

    async fn fetch_translations(&self, lang: &str) -> Result<Translations, ApiError> {
        self.calls.lock().unwrap().push(format!("translations {lang}"));
        if self.hang_translations {
            futures::future::pending::<()>().await;
        }
        self.translations
            .get(lang)
            .cloned()
            .ok_or_else(|| ApiError::Transport("connection refused".to_owned()))
    }
}
