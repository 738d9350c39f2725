//! Session store: the single source of truth for authentication state.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` owns the current `Session` and `UserProfile` and mirrors
//! both into tab-scoped storage (`authData` / `userData`). Every mutation goes
//! through [`SessionStore::apply`], and each command writes storage before it
//! returns, so a reader of storage after any completed operation sees exactly
//! what the in-memory snapshot holds.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell keeps the store inside an `RwSignal` provided via context;
//! the navigation guard only reads [`SessionSnapshot`]. Profile fetches are
//! split into begin/finish so the reactive shell can await the network without
//! holding a borrow of the store across the suspension point.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiError, Backend};
use crate::net::types::{Session, UserProfile};
use crate::util::storage::{self, SessionStorage};

/// Storage key for the serialized [`Session`].
pub const AUTH_DATA_KEY: &str = "authData";
/// Storage key for the serialized [`UserProfile`].
pub const USER_DATA_KEY: &str = "userData";

/// Outcome of the most recent profile fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    #[default]
    NotAttempted,
    InFlight,
    Succeeded,
    Failed(String),
}

/// Immutable view of the store handed to readers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub profile: Option<UserProfile>,
    pub profile_status: ProfileStatus,
}

impl SessionSnapshot {
    /// True iff a session is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.id)
    }

    #[must_use]
    pub fn user_role(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.role.as_str())
    }

    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email.as_str())
    }
}

/// Mutations accepted by [`SessionStore::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum SessionCommand {
    Login(Session),
    Logout,
    ProfileFetchStarted,
    ProfileLoaded(UserProfile),
    ProfileFailed(String),
}

/// Context captured when a profile fetch starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    pub session: Session,
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    snapshot: SessionSnapshot,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Build a store from whatever `storage` holds. Absent or malformed entries
    /// mean "no session"; a profile without a session, or one belonging to a
    /// different user, is dropped along with its key.
    pub fn rehydrate(storage: S) -> Self {
        let session = storage::load_json::<Session>(&storage, AUTH_DATA_KEY);

        let profile = match &session {
            None => {
                if storage.get_item(USER_DATA_KEY).is_some() {
                    log::warn!("dropping stored profile without a session");
                }
                storage.remove_item(AUTH_DATA_KEY);
                storage.remove_item(USER_DATA_KEY);
                None
            }
            Some(session) => {
                let profile = storage::load_json::<UserProfile>(&storage, USER_DATA_KEY)
                    .filter(|p| profile_matches(p, session));
                if profile.is_none() {
                    storage.remove_item(USER_DATA_KEY);
                }
                profile
            }
        };

        let profile_status = if profile.is_some() {
            ProfileStatus::Succeeded
        } else {
            ProfileStatus::NotAttempted
        };
        log::debug!("session store rehydrated (authenticated: {})", session.is_some());

        Self { storage, snapshot: SessionSnapshot { session, profile, profile_status } }
    }

    #[must_use]
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply one command, persisting before returning.
    pub fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Login(session) => {
                let same_user = self.snapshot.user_id() == Some(session.id);
                let replaced = self.snapshot.session.as_ref() != Some(&session);
                if !same_user && self.snapshot.profile.is_some() {
                    self.snapshot.profile = None;
                    self.storage.remove_item(USER_DATA_KEY);
                }
                // An in-flight fetch for the replaced session will be discarded.
                if !same_user || (replaced && self.snapshot.profile_status == ProfileStatus::InFlight) {
                    self.snapshot.profile_status = ProfileStatus::NotAttempted;
                }
                self.persist(AUTH_DATA_KEY, &session);
                log::info!("logged in as user {} ({})", session.id, session.role);
                self.snapshot.session = Some(session);
            }
            SessionCommand::Logout => {
                self.storage.remove_item(AUTH_DATA_KEY);
                self.storage.remove_item(USER_DATA_KEY);
                if self.snapshot.session.is_some() {
                    log::info!("logged out");
                }
                self.snapshot = SessionSnapshot::default();
            }
            SessionCommand::ProfileFetchStarted => {
                if self.snapshot.session.is_some() {
                    self.snapshot.profile_status = ProfileStatus::InFlight;
                }
            }
            SessionCommand::ProfileLoaded(profile) => {
                if self.snapshot.session.is_none() {
                    log::debug!("ignoring profile for a closed session");
                    return;
                }
                self.persist(USER_DATA_KEY, &profile);
                self.snapshot.profile = Some(profile);
                self.snapshot.profile_status = ProfileStatus::Succeeded;
            }
            SessionCommand::ProfileFailed(reason) => {
                log::error!("error fetching user data: {reason}");
                if self.snapshot.session.is_some() {
                    self.snapshot.profile_status = ProfileStatus::Failed(reason);
                }
            }
        }
    }

    pub fn login(&mut self, session: Session) {
        self.apply(SessionCommand::Login(session));
    }

    /// Clear session and profile. Calling it while logged out is a no-op.
    pub fn logout(&mut self) {
        self.apply(SessionCommand::Logout);
    }

    /// Mark a profile fetch as in flight. `None` when there is no session.
    pub fn begin_profile_fetch(&mut self) -> Option<ProfileRequest> {
        let session = self.snapshot.session.clone()?;
        self.apply(SessionCommand::ProfileFetchStarted);
        Some(ProfileRequest { session })
    }

    /// Record the outcome of a fetch started by [`Self::begin_profile_fetch`].
    ///
    /// Returns `false` and changes nothing when the session changed while the
    /// request was in flight.
    pub fn finish_profile_fetch(&mut self, request: &ProfileRequest, result: Result<UserProfile, ApiError>) -> bool {
        if self.snapshot.session.as_ref() != Some(&request.session) {
            log::debug!("discarding profile response for a stale session");
            return false;
        }
        match result {
            Ok(profile) => self.apply(SessionCommand::ProfileLoaded(profile)),
            Err(e) => self.apply(SessionCommand::ProfileFailed(e.to_string())),
        }
        true
    }

    /// Fetch and store the current user's profile. Failures are recorded in
    /// [`ProfileStatus`] and logged, never returned.
    pub async fn fetch_user_profile<B: Backend + ?Sized>(&mut self, backend: &B) {
        let Some(request) = self.begin_profile_fetch() else {
            return;
        };
        let result = backend.fetch_user(&request.session).await;
        self.finish_profile_fetch(&request, result);
    }

    /// Write `value` under `key`. On failure the key is removed so a reload
    /// never restores an older value than memory holds.
    fn persist<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Err(e) = storage::save_json(&self.storage, key, value) {
            log::error!("failed to persist {key}: {e}");
            self.storage.remove_item(key);
        }
    }
}

/// A stored profile carrying an `id` must carry the session's.
fn profile_matches(profile: &UserProfile, session: &Session) -> bool {
    let owner = profile.get("id").and_then(serde_json::Value::as_i64);
    if owner.is_some_and(|id| id != session.id) {
        log::warn!("dropping stored profile of user {owner:?} for session user {}", session.id);
        return false;
    }
    true
}
