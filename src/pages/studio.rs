//! Image-generation studio: prompt composer, generation transcript, and the
//! style/size pickers.

use leptos::prelude::*;

use crate::components::chat_header::ChatHeader;
use crate::components::conversation_sidebar::ConversationSidebar;
use crate::components::image_result::ImageResult;
use crate::components::size_selector::SizeSelector;
use crate::components::style_selector::StyleSelector;
use crate::net::types::GenerateRequest;
use crate::state::chat::{ChatState, GenerationStatus};
use crate::state::toast::{ToastState, ToastTone};

#[cfg(feature = "hydrate")]
use crate::state::chat::MAX_REFERENCE_BYTES;

#[component]
pub fn StudioPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let prompt = RwSignal::new(String::new());
    let sidebar_open = RwSignal::new(false);
    let show_attach = RwSignal::new(false);
    let show_style = RwSignal::new(false);
    let show_size = RwSignal::new(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let generate = Callback::new(move |()| {
        if chat.with_untracked(|c| c.generating) {
            return;
        }
        let current = prompt.get_untracked().trim().to_owned();
        if current.is_empty() {
            toasts.update(|t| {
                t.push(
                    "Empty prompt",
                    "Please enter a description for your image",
                    ToastTone::Destructive,
                );
            });
            return;
        }
        prompt.set(String::new());

        // Snapshot the selections before the entry is appended; completion
        // clears them.
        let final_prompt = chat.with_untracked(|c| c.final_prompt(&current));
        let request = chat.with_untracked(|c| GenerateRequest {
            prompt: final_prompt.clone(),
            count: c.image_count,
            width: c.selected_size.width,
            height: c.selected_size.height,
            reference_image: c.reference_image.clone(),
        });
        chat.update(|c| c.begin_generation(current));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_images(&request).await {
                Ok(urls) => {
                    let now = js_sys::Date::now();
                    chat.update(|c| c.complete_generation(&final_prompt, urls, now));
                    let plural = if request.count > 1 { "s" } else { "" };
                    toasts.update(|t| {
                        t.push(
                            "Success!",
                            &format!("Generated {} image{plural}", request.count),
                            ToastTone::Success,
                        );
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("generation failed: {err}");
                    chat.update(ChatState::fail_generation);
                    toasts.update(|t| {
                        t.push(
                            "Generation failed",
                            "Failed to generate images. Please try again.",
                            ToastTone::Destructive,
                        );
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (final_prompt, request);
    });

    let new_chat = Callback::new(move |()| {
        chat.update(ChatState::clear);
        prompt.set(String::new());
        toasts.update(|t| {
            t.push("Chat cleared", "All generated images have been removed", ToastTone::Info);
        });
    });

    let toggle_sidebar = Callback::new(move |()| sidebar_open.update(|v| *v = !*v));

    let pick_reference = move |_| {
        show_attach.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_upload = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                if file.size() > MAX_REFERENCE_BYTES {
                    toasts.update(|t| {
                        t.push(
                            "File too large",
                            "Please select an image under 5MB",
                            ToastTone::Destructive,
                        );
                    });
                    return;
                }
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    chat.update(|c| c.reference_image = Some(url));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_prompt_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            generate.run(());
        }
    };

    let send_disabled =
        move || chat.with(|c| c.generating) || prompt.with(|p| p.trim().is_empty());

    let transcript = move || {
        chat.with(|c| c.entries.clone())
            .into_iter()
            .map(|entry| {
                let prompt_text = entry.prompt.clone();
                let status = match entry.status {
                    GenerationStatus::Creating => view! {
                        <div class="chat__creating">
                            <span class="spinner"></span>
                            "Creating your image..."
                        </div>
                    }
                        .into_any(),
                    GenerationStatus::Completed(images) => view! {
                        <div class="chat__results">
                            {images
                                .into_iter()
                                .map(|image| {
                                    let recreate_prompt = entry.prompt.clone();
                                    let on_recreate = Callback::new(move |()| {
                                        prompt.set(recreate_prompt.clone());
                                        generate.run(());
                                    });
                                    view! { <ImageResult image=image on_recreate=on_recreate/> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any(),
                };

                view! {
                    <div class="chat__turn">
                        <div class="chat__prompt">
                            <p>{prompt_text}</p>
                        </div>
                        {status}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="studio">
            <ConversationSidebar open=sidebar_open/>

            <div class="studio__main">
                <ChatHeader on_toggle_sidebar=toggle_sidebar on_new_chat=new_chat/>

                <div class="studio__chat">
                    <Show
                        when=move || chat.with(|c| !c.entries.is_empty())
                        fallback=|| {
                            view! {
                                <div class="studio__hero">
                                    <h2>"Create Amazing Images"</h2>
                                    <p>"Describe your vision and watch it come to life"</p>
                                </div>
                            }
                        }
                    >
                        <div class="chat">{transcript}</div>
                    </Show>
                </div>

                <div class="studio__composer">
                    <Show when=move || chat.with(|c| c.selected_style.is_some())>
                        <div class="composer__chip">
                            <span>
                                {move || {
                                    chat.with(|c| {
                                        c.selected_style
                                            .map(|s| format!("Style: {}", s.name))
                                            .unwrap_or_default()
                                    })
                                }}
                            </span>
                            <button
                                class="composer__chip-dismiss"
                                aria-label="Remove style"
                                on:click=move |_| chat.update(|c| c.selected_style = None)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || chat.with(|c| c.reference_image.is_some())>
                        <div class="composer__chip composer__chip--reference">
                            <img
                                class="composer__reference"
                                src=move || {
                                    chat.with(|c| c.reference_image.clone().unwrap_or_default())
                                }
                                alt="Reference"
                            />
                            <span>"Reference image"</span>
                            <button
                                class="composer__chip-dismiss"
                                aria-label="Remove reference image"
                                on:click=move |_| chat.update(|c| c.reference_image = None)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    </Show>

                    <div class="composer__row">
                        <div class="composer__attach">
                            <button
                                class="btn btn--icon composer__plus"
                                aria-label="Attachments"
                                on:click=move |_| show_attach.update(|v| *v = !*v)
                            >
                                "+"
                            </button>
                            <Show when=move || show_attach.get()>
                                <div class="composer__menu">
                                    <button class="composer__menu-item" on:click=pick_reference>
                                        "Upload Image"
                                    </button>
                                    <button
                                        class="composer__menu-item"
                                        on:click=move |_| {
                                            show_attach.set(false);
                                            show_style.set(true);
                                        }
                                    >
                                        "Select Style"
                                    </button>
                                    <button
                                        class="composer__menu-item"
                                        on:click=move |_| {
                                            show_attach.set(false);
                                            show_size.set(true);
                                        }
                                    >
                                        "Size & Count"
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <textarea
                            class="composer__input"
                            placeholder="Describe the image you want to create..."
                            prop:value=move || prompt.get()
                            disabled=move || chat.with(|c| c.generating)
                            on:input=move |ev| prompt.set(event_target_value(&ev))
                            on:keydown=on_prompt_keydown
                        ></textarea>

                        <button
                            class="btn btn--primary composer__send"
                            aria-label="Generate"
                            disabled=send_disabled
                            on:click=move |_| generate.run(())
                        >
                            {move || if chat.with(|c| c.generating) { "\u{231b}" } else { "\u{27a4}" }}
                        </button>
                    </div>

                    <input
                        class="composer__file"
                        type="file"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_upload
                    />
                </div>
            </div>

            <StyleSelector open=show_style/>
            <SizeSelector open=show_size/>
        </div>
    }
}
