use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Page not found"</h1>
            <a href="/" class="btn">"Back to home"</a>
        </div>
    }
}
