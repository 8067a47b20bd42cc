//! Style picker dialog: a thumbnail grid of the preset styles.

use leptos::prelude::*;

use crate::state::chat::{ChatState, STYLE_PRESETS};

#[component]
pub fn StyleSelector(open: RwSignal<bool>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Select a Style"</h2>
                    <div class="style-grid">
                        {STYLE_PRESETS
                            .iter()
                            .map(|style| {
                                let style = *style;
                                let selected = move || {
                                    chat.with(|c| {
                                        c.selected_style.is_some_and(|s| s.name == style.name)
                                    })
                                };
                                view! {
                                    <button
                                        class="style-grid__item"
                                        class=("style-grid__item--selected", selected)
                                        on:click=move |_| {
                                            chat.update(|c| c.selected_style = Some(style));
                                            open.set(false);
                                        }
                                    >
                                        <img
                                            class="style-grid__thumb"
                                            src=style.thumbnail
                                            alt=style.name
                                        />
                                        <span class="style-grid__name">{style.name}</span>
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
