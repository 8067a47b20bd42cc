use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Entry chooser between logging in and creating an account.
#[component]
pub fn AuthPage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_signup = navigate.clone();

    view! {
        <div class="page page--centered">
            <div class="auth-card">
                <h1>"Pictora"</h1>
                <p class="auth-card__tagline">"Turn words into images"</p>

                <div class="auth-card__actions">
                    <button
                        class="btn btn--primary btn--block"
                        on:click=move |_| navigate("/login", NavigateOptions::default())
                    >
                        "Log in"
                    </button>
                    <button
                        class="btn btn--outline btn--block"
                        on:click=move |_| nav_signup("/signup", NavigateOptions::default())
                    >
                        "Sign up"
                    </button>
                </div>
            </div>
        </div>
    }
}
