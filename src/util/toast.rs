//! Show a toast and schedule its dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Replace the current toast. In the browser it is dismissed after its
/// duration unless a newer toast has replaced it by then.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let Some(toast) = toasts.try_update(|t| t.show(message, kind)) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(toast.duration_ms).await;
        toasts.update(|t| {
            t.dismiss(toast.id);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = toast;
    }
}
