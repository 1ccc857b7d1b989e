//! Toast stack rendered once at the application root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

/// Renders queued notices; click a toast to dismiss it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast toast--error" } else { "toast toast--success" };
                    view! {
                        <div
                            class=class
                            on:click=move |_| {
                                toasts.update(|s| {
                                    s.dismiss(id);
                                });
                            }
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
