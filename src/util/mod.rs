//! Browser-facing helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` abstracts tab-scoped persistence for the session store; `auth`
//! and `toast` wrap the signal plumbing that pages repeat.

pub mod auth;
pub mod storage;
pub mod toast;
