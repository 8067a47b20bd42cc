use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback page for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="not-found">
                <h1>"404"</h1>
                <p class="not-found__text">"This page does not exist."</p>
                <A href="/">"Back to start"</A>
            </div>
        </div>
    }
}
