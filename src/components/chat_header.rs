//! Studio header: sidebar toggle, new chat, and the chat options menu
//! (rename, delete, report).

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::toast::{ToastState, ToastTone};

#[component]
pub fn ChatHeader(
    #[prop(into)] on_toggle_sidebar: Callback<()>,
    #[prop(into)] on_new_chat: Callback<()>,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let show_menu = RwSignal::new(false);
    let show_edit = RwSignal::new(false);
    let show_delete = RwSignal::new(false);
    let show_report = RwSignal::new(false);
    let edit_title = RwSignal::new(String::new());

    let open_edit = move |_| {
        let current = conversations.with_untracked(|c| {
            c.title_of(&c.active_id).unwrap_or("New Chat").to_owned()
        });
        edit_title.set(current);
        show_menu.set(false);
        show_edit.set(true);
    };

    let confirm_edit = Callback::new(move |()| {
        let renamed = conversations.try_update(|c| {
            let id = c.active_id.clone();
            c.rename(&id, &edit_title.get_untracked())
        });
        if renamed.unwrap_or(false) {
            toasts.update(|t| {
                t.push(
                    "Title updated",
                    "Conversation title has been updated successfully",
                    ToastTone::Success,
                );
            });
        }
        show_edit.set(false);
    });

    let confirm_delete = move |_| {
        chat.update(ChatState::clear);
        show_delete.set(false);
        toasts.update(|t| {
            t.push("Chat deleted", "Conversation has been deleted", ToastTone::Info);
        });
    };

    let confirm_report = move |_| {
        show_report.set(false);
        toasts.update(|t| {
            t.push("Report submitted", "Thank you for your feedback", ToastTone::Success);
        });
    };

    view! {
        <header class="chat-header">
            <div class="chat-header__group">
                <button
                    class="btn btn--icon"
                    aria-label="Toggle sidebar"
                    on:click=move |_| on_toggle_sidebar.run(())
                >
                    "\u{2630}"
                </button>
                <button
                    class="btn btn--icon"
                    aria-label="New chat"
                    on:click=move |_| on_new_chat.run(())
                >
                    "\u{270e}"
                </button>
            </div>

            <button
                class="btn btn--icon"
                aria-label="Chat options"
                on:click=move |_| show_menu.set(true)
            >
                "\u{22ee}"
            </button>
        </header>

        <Show when=move || show_menu.get()>
            <div class="dialog-backdrop" on:click=move |_| show_menu.set(false)>
                <div class="dialog dialog--menu" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Chat Options"</h2>
                    <div class="dialog__menu">
                        <button class="dialog__menu-item" on:click=open_edit>
                            "Edit Chat Name"
                        </button>
                        <button
                            class="dialog__menu-item dialog__menu-item--destructive"
                            on:click=move |_| {
                                show_menu.set(false);
                                show_delete.set(true);
                            }
                        >
                            "Delete Chat"
                        </button>
                        <button
                            class="dialog__menu-item"
                            on:click=move |_| {
                                show_menu.set(false);
                                show_report.set(true);
                            }
                        >
                            "Report"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || show_edit.get()>
            <div class="dialog-backdrop" on:click=move |_| show_edit.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Edit Chat Name"</h2>
                    <label class="dialog__label">
                        "Chat name"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Enter chat name"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| edit_title.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    confirm_edit.run(());
                                }
                            }
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_edit.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| confirm_edit.run(())>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || show_delete.get()>
            <div class="dialog-backdrop" on:click=move |_| show_delete.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete Chat"</h2>
                    <p class="dialog__text">
                        "Are you sure you want to delete this chat? This action cannot be undone."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_delete.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--destructive" on:click=confirm_delete>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || show_report.get()>
            <div class="dialog-backdrop" on:click=move |_| show_report.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Report Chat"</h2>
                    <p class="dialog__text">
                        "Please describe the issue you're experiencing with this chat."
                    </p>
                    <input class="dialog__input" type="text" placeholder="Describe the issue..."/>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| show_report.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=confirm_report>
                            "Submit Report"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
