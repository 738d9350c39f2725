//! Route-level page components.

pub mod login;
pub mod not_found;
pub mod route_page;
pub mod unauthorized;
