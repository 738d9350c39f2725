//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`) so components depend on small
//! focused models. Each model is provided through a Leptos `RwSignal` context.

pub mod session;
pub mod toast;

/// Session store type used by the running app.
pub type AppSessionStore = session::SessionStore<crate::util::storage::BrowserSessionStorage>;
