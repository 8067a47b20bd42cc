//! Size and count picker dialog.

use leptos::prelude::*;

use crate::state::chat::{ChatState, MAX_IMAGE_COUNT, MIN_IMAGE_COUNT, SIZE_PRESETS};

#[component]
pub fn SizeSelector(open: RwSignal<bool>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Image Size & Count"</h2>

                    <p class="dialog__label">"Image Size"</p>
                    <div class="size-grid">
                        {SIZE_PRESETS
                            .iter()
                            .map(|size| {
                                let size = *size;
                                let selected = move || {
                                    chat.with(|c| c.selected_size.label == size.label)
                                };
                                view! {
                                    <button
                                        class="size-grid__item"
                                        class=("size-grid__item--selected", selected)
                                        on:click=move |_| chat.update(|c| c.selected_size = size)
                                    >
                                        <span class="size-grid__label">{size.label}</span>
                                        <span class="size-grid__dims">
                                            {format!("{} \u{d7} {}", size.width, size.height)}
                                        </span>
                                        <span class="size-grid__aspect">
                                            {format!("Ratio: {}", size.aspect)}
                                        </span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <p class="dialog__label">"Number of Images"</p>
                    <div class="count-row">
                        {(MIN_IMAGE_COUNT..=MAX_IMAGE_COUNT)
                            .map(|count| {
                                let selected = move || chat.with(|c| c.image_count == count);
                                view! {
                                    <button
                                        class="count-row__item"
                                        class=("count-row__item--selected", selected)
                                        on:click=move |_| chat.update(|c| c.set_image_count(count))
                                    >
                                        {count}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
