//! Client-side routing: the declared route table and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell resolves every location change through [`table::resolve`]
//! and asks [`guard::check_intent`] whether the target view may be built.

pub mod guard;
pub mod table;
