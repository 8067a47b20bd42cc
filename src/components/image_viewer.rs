//! Full-size image dialog.

use leptos::prelude::*;

#[component]
pub fn ImageViewer(open: RwSignal<bool>, image_url: String) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop dialog-backdrop--viewer" on:click=move |_| open.set(false)>
                <div class="image-viewer" on:click=move |ev| ev.stop_propagation()>
                    <img class="image-viewer__image" src=image_url.clone() alt="Generated image"/>
                </div>
            </div>
        </Show>
    }
}
