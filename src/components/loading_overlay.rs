//! Progress overlay shown on top of an image while it loads.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(#[prop(into)] progress: Signal<u32>) -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="loading-overlay__percent">{move || progress.get()}"%"</div>
            <div class="loading-overlay__track">
                <div class="loading-overlay__shimmer"></div>
                <div
                    class="loading-overlay__fill"
                    style:width=move || format!("{}%", progress.get())
                ></div>
            </div>
        </div>
    }
}
