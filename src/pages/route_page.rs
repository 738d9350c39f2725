//! Placeholder view for marketplace routes whose screens live elsewhere.
//!
//! Renders the translated route title and any path parameters so navigation
//! and guarding can be exercised end to end.

#[cfg(test)]
#[path = "route_page_test.rs"]
mod route_page_test;

use leptos::prelude::*;

use crate::i18n::use_translate;
use crate::routing::table::RouteIntent;

/// Route names whose title key is not their snake-cased name.
const TITLE_OVERRIDES: &[(&str, &str)] = &[
    ("chats", "messages"),
    ("chat", "messages"),
    ("userDashboard", "my_dashboard"),
    ("adminDashboard", "dashboard"),
    ("userProfile", "profile"),
    ("adminProfile", "profile"),
    ("adminUsers", "users"),
    ("adminComplaints", "disputes"),
    ("productDetail", "product_details"),
    ("editProduct", "edit"),
    ("emailVerification", "verify_email"),
    ("phoneVerification", "verify_phone"),
];

/// Translation key for a route's title.
pub fn title_key(route_name: &str) -> String {
    if let Some((_, key)) = TITLE_OVERRIDES.iter().find(|(name, _)| *name == route_name) {
        return (*key).to_owned();
    }
    let mut key = String::with_capacity(route_name.len() + 4);
    for ch in route_name.chars() {
        if ch.is_ascii_uppercase() {
            if !key.is_empty() {
                key.push('_');
            }
            key.push(ch.to_ascii_lowercase());
        } else {
            key.push(ch);
        }
    }
    key
}

#[component]
pub fn RoutePage(intent: RouteIntent) -> impl IntoView {
    let t = use_translate();
    let key = title_key(intent.name);
    let params = intent
        .params
        .iter()
        .map(|(k, v)| view! { <li><span class="route-param__key">{*k}</span>": "{v.clone()}</li> })
        .collect_view();

    view! {
        <section class="route-page" data-route=intent.name>
            <h1>{move || t(&key)}</h1>
            <ul class="route-params">{params}</ul>
        </section>
    }
}
