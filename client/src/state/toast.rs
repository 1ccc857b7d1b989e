//! Transient notification queue.
//!
//! Pages push a [`Notice`] after each finished operation; the `Toaster`
//! component renders the queue and each toast removes itself after
//! [`TOAST_LIFETIME`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;
use projectflow::ApiError;
use projectflow::notice::{Notice, Operation};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Show `notice` and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|s| id = s.push(notice));
    leptos::task::spawn_local(async move {
        sleep(TOAST_LIFETIME).await;
        toasts.update(|s| {
            s.dismiss(id);
        });
    });
}

/// Show the notice, if any, for a finished operation.
pub fn report<T>(toasts: RwSignal<ToastState>, operation: Operation, result: &Result<T, ApiError>) {
    if let Some(notice) = Notice::for_result(operation, result) {
        notify(toasts, notice);
    }
}

/// Timer that only runs in the browser; elsewhere it resolves immediately.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
