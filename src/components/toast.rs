//! Renderer for the dismissible notification queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

/// Fixed-position stack of dismissible notifications.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <strong class="toast__title">{toast.title}</strong>
                                {toast.detail.map(|d| view! { <p class="toast__detail">{d}</p> })}
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| {
                                        let id = id.clone();
                                        notify.update(|n| n.dismiss(&id));
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
