use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::account::{StrengthBand, password_ready, password_strength};

/// Final step of the recovery flow: choose a new password, or skip straight
/// back to login.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_back = navigate.clone();
    let nav_skip = navigate.clone();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let strength = move || password.with(|p| password_strength(p));
    let band = move || StrengthBand::from_score(strength());
    let ready = move || password.with(|p| confirm.with(|c| password_ready(p, c)));

    let save = move |_| {
        if ready() {
            navigate("/login", NavigateOptions::default());
        }
    };

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <div class="auth-card__row">
                    <button
                        class="auth-card__back"
                        on:click=move |_| nav_back("/verify-reset", NavigateOptions::default())
                    >
                        "\u{2190} Back"
                    </button>
                    <button
                        class="auth-card__link"
                        on:click=move |_| nav_skip("/login", NavigateOptions::default())
                    >
                        "Skip"
                    </button>
                </div>

                <h1>"Reset your password"</h1>
                <p class="auth-card__tagline">"Pick a new password for your account"</p>

                <label class="field">
                    "New password"
                    <input
                        class="field__input"
                        type="password"
                        placeholder="Create a password (min. 8 characters)"
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

                <button
                    class="btn btn--primary btn--block"
                    disabled=move || !ready()
                    on:click=save
                >
                    "Save password"
                </button>
            </div>
        </div>
    }
}
