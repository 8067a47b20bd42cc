use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::account::{
    MIN_PASSWORD_LEN, StrengthBand, password_ready, password_strength, validate_username,
};

/// Profile completion after email verification: username, password, and
/// terms agreement.
#[component]
pub fn SetupAccountPage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_back = navigate.clone();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);

    let username_valid = move || username.with(|u| validate_username(u));
    let strength = move || password.with(|p| password_strength(p));
    let band = move || StrengthBand::from_score(strength());

    let can_submit = move || {
        username_valid() == Some(true)
            && password.with(|p| confirm.with(|c| password_ready(p, c)))
            && agreed.get()
    };

    let submit = move |_| {
        if can_submit() {
            navigate("/home", NavigateOptions::default());
        }
    };

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <button
                    class="auth-card__back"
                    on:click=move |_| nav_back("/verify-email", NavigateOptions::default())
                >
                    "\u{2190} Back"
                </button>

                <h1>"Set up your account"</h1>
                <p class="auth-card__tagline">"Complete your profile"</p>

                <label class="field">
                    "Username"
                    <input
                        class="field__input"
                        class=("field__input--valid", move || username_valid() == Some(true))
                        class=("field__input--invalid", move || username_valid() == Some(false))
                        type="text"
                        placeholder="Choose a username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || username_valid() == Some(false)>
                    <p class="field__hint field__hint--invalid">
                        "Username must be at least 3 characters and contain only letters, numbers, and underscores"
                    </p>
                </Show>

                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        placeholder=format!("Create a password (min. {MIN_PASSWORD_LEN} characters)")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || password.with(|p| !p.is_empty())>
                    <div class="strength">
                        <div class="strength__row">
                            <span class="strength__caption">"Password strength"</span>
                            <span class=move || {
                                format!("strength__label strength__label--{}", band().modifier())
                            }>{move || band().label()}</span>
                        </div>
                        <div class="strength__track">
                            <div
                                class=move || {
                                    format!("strength__fill strength__fill--{}", band().modifier())
                                }
                                style:width=move || format!("{}%", strength())
                            ></div>
                        </div>
                    </div>
                </Show>

                <label class="field">
                    "Confirm password"
                    <input
                        class="field__input"
                        type="password"
                        placeholder="Repeat your password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || agreed.get()
                        on:change=move |ev| agreed.set(event_target_checked(&ev))
                    />
                    "I agree to the Terms of Service and Privacy Policy"
                </label>

                <button
                    class="btn btn--primary btn--block"
                    disabled=move || !can_submit()
                    on:click=submit
                >
                    "Complete setup"
                </button>
            </div>
        </div>
    }
}
