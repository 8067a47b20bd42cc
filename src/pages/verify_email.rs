use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::code_entry::CodeEntryForm;
use crate::state::auth::AuthState;
use crate::state::verify::DEMO_CODE;

/// Email verification screen in the signup flow.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let nav_back = navigate.clone();

    let on_verified = Callback::new(move |()| {
        navigate("/setup-account", NavigateOptions::default());
    });

    let on_resend = Callback::new(move |()| {
        let address = auth.with_untracked(AuthState::display_email);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::request_verification_code(&address).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = address;
    });

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <button
                    class="auth-card__back"
                    on:click=move |_| nav_back("/signup", NavigateOptions::default())
                >
                    "\u{2190} Back"
                </button>

                <h1>"Verify your email"</h1>
                <p class="auth-card__tagline">"Check your email. We've sent a code to"</p>
                <p class="auth-card__email">{move || auth.with(AuthState::display_email)}</p>

                <CodeEntryForm expected=DEMO_CODE on_verified=on_verified on_resend=on_resend/>
            </div>
        </div>
    }
}
