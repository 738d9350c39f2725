//! Shared UI components mounted by the app shell.

pub mod nav_bar;
pub mod route_outlet;
pub mod toast_host;
