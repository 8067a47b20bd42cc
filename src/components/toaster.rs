//! Toast overlay rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

/// Renders the current toast queue in a fixed corner stack.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.with(|t| t.toasts.clone())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast/> }
            />
        </div>
    }
}

/// One toast row. Auto-dismisses after [`TOAST_DURATION_MS`]; the timer
/// handle is dropped with the row, so an early manual dismissal also
/// cancels it.
#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let timer = StoredValue::new_local(Some(gloo_timers::callback::Timeout::new(
            TOAST_DURATION_MS,
            move || toasts.update(|t| t.dismiss(id)),
        )));
        on_cleanup(move || timer.set_value(None));
    }

    let class = format!("toast toast--{}", toast.tone.modifier());

    view! {
        <div class=class role="status">
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                <p class="toast__message">{toast.message}</p>
            </div>
            <button
                class="toast__dismiss"
                aria-label="Dismiss"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "\u{d7}"
            </button>
        </div>
    }
}
