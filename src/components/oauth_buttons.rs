//! Placeholder OAuth sign-in buttons. There is no provider wired up; each
//! button raises an informational toast.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastTone};

#[component]
pub fn OauthButtons() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let not_wired = move |provider: &'static str| {
        toasts.update(|t| {
            t.push(
                "Not available",
                &format!("{provider} sign-in is not available in the demo"),
                ToastTone::Info,
            );
        });
    };

    view! {
        <div class="oauth">
            <button class="btn btn--outline oauth__button" on:click=move |_| not_wired("Google")>
                "Continue with Google"
            </button>
            <button class="btn btn--outline oauth__button" on:click=move |_| not_wired("Apple")>
                "Continue with Apple"
            </button>
        </div>
    }
}
