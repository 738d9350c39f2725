//! Networking modules for the marketplace backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls behind the [`api::Backend`] trait and `types`
//! defines the wire schema shared with the session store.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
