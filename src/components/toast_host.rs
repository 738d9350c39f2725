//! Renders the current global toast, if any.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    move || {
        toasts.with(|s| s.current.clone()).map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast--success",
                ToastKind::Error => "toast toast--error",
            };
            view! {
                <div id="globalToast" class=class role="status">
                    <p>{toast.message}</p>
                </div>
            }
        })
    }
}
