//! Dialog Host Component
//!
//! Renders the overlay: the pending confirmation prompt and the toast stack.

use leptos::prelude::*;

use crate::overlay::Overlay;

/// Modal confirmation and toast notices
///
/// # Arguments
/// * `overlay` - Shared overlay state, also handed to the controller as its
///   `ConfirmationPrompt` and `Notifier`
#[component]
pub fn DialogHost(overlay: Overlay) -> impl IntoView {
    let prompt = overlay.prompt;
    let toasts = overlay.toasts;
    let overlay = StoredValue::new(overlay);

    view! {
        {move || prompt.get().map(|request| view! {
            <div class="dialog-backdrop">
                <div class=format!("dialog {}", request.kind.css_class())>
                    <h2 class="dialog-title">{request.title}</h2>
                    <p class="dialog-text">{request.text}</p>
                    <div class="dialog-actions">
                        <button
                            class="dialog-confirm"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                overlay.with_value(|o| o.answer(true));
                            }
                        >
                            {request.confirm_label}
                        </button>
                        <button
                            class="dialog-cancel"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                overlay.with_value(|o| o.answer(false));
                            }
                        >
                            {request.cancel_label}
                        </button>
                    </div>
                </div>
            </div>
        })}

        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.notice.kind.css_class())>
                            <strong class="toast-title">{toast.notice.title}</strong>
                            <span class="toast-message">{toast.notice.message}</span>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| overlay.with_value(|o| o.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Spinner shown while any operation holds the loading indicator
#[component]
pub fn LoadingSpinner(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="loading-indicator">"Loading..."</div>
        </Show>
    }
}
