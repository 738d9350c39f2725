//! Landing page for navigation denied by a role requirement.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Unauthorized"</h1>
            <p>"You do not have permission to view this page."</p>
            <a href="/" class="btn">"Back to home"</a>
        </div>
    }
}
