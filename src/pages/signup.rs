use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::oauth_buttons::OauthButtons;
use crate::state::auth::AuthState;

/// Signup form. Records the pending email and hands off to the email
/// verification screen.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let nav_back = navigate.clone();
    let nav_login = navigate.clone();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |_| {
        let address = email.get_untracked().trim().to_owned();
        if address.is_empty() {
            return;
        }
        auth.update(|a| a.pending_email = Some(address.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::request_verification_code(&address).await;
        });

        navigate("/verify-email", NavigateOptions::default());
    };

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <button
                    class="auth-card__back"
                    on:click=move |_| nav_back("/auth", NavigateOptions::default())
                >
                    "\u{2190} Back"
                </button>

                <h1>"Create your account"</h1>
                <p class="auth-card__tagline">"Start creating images in minutes"</p>

                <OauthButtons/>

                <div class="auth-card__divider">"or"</div>

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

                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        placeholder="Create a password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary btn--block" on:click=submit>
                    "Sign up"
                </button>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <button
                        class="auth-card__link"
                        on:click=move |_| nav_login("/login", NavigateOptions::default())
                    >
                        "Log in"
                    </button>
                </p>
            </div>
        </div>
    }
}
