use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Start of the password-recovery flow: collect the email a recovery code
/// should go to.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let nav_back = navigate.clone();

    let email = RwSignal::new(String::new());

    let recover = move |_| {
        let address = email.get_untracked().trim().to_owned();
        if address.is_empty() {
            return;
        }
        auth.update(|a| a.pending_email = Some(address.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::request_verification_code(&address).await;
        });

        navigate("/verify-reset", NavigateOptions::default());
    };

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <button
                    class="auth-card__back"
                    on:click=move |_| nav_back("/login", NavigateOptions::default())
                >
                    "\u{2190} Back"
                </button>

                <h1>"Forgot password?"</h1>
                <p class="auth-card__tagline">"Enter your email to receive a recovery code"</p>

                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary btn--block" on:click=recover>
                    "Recover"
                </button>
            </div>
        </div>
    }
}
