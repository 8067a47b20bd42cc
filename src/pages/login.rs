use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::oauth_buttons::OauthButtons;

/// Login form. There is no real session; submitting goes straight to the
/// studio.
#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_back = navigate.clone();
    let nav_forgot = navigate.clone();
    let nav_signup = navigate.clone();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);

    let submit = move |_| {
        leptos::logging::log!(
            "login: {} (remember: {})",
            email.get_untracked(),
            remember.get_untracked()
        );
        navigate("/home", NavigateOptions::default());
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

                <h1>"Welcome back"</h1>
                <p class="auth-card__tagline">"Sign in to your account"</p>

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
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <div class="auth-card__row">
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button
                        class="auth-card__link"
                        on:click=move |_| nav_forgot("/forgot-password", NavigateOptions::default())
                    >
                        "Forgot password?"
                    </button>
                </div>

                <button class="btn btn--primary btn--block" on:click=submit>
                    "Log in"
                </button>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <button
                        class="auth-card__link"
                        on:click=move |_| nav_signup("/signup", NavigateOptions::default())
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
