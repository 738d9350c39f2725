//! Global toast notification state.
//!
//! Only one toast is visible at a time; showing a new one replaces the old.
//! Dismissal is keyed by id so a timer scheduled for a replaced toast cannot
//! remove its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast with the default duration, returning it.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.show_for(message, kind, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn show_for(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Toast {
        self.next_id += 1;
        let toast = Toast { id: self.next_id, message: message.into(), kind, duration_ms };
        self.current = Some(toast.clone());
        toast
    }

    /// Remove the current toast if it is still `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            return true;
        }
        false
    }
}
