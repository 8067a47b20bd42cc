//! Conversation list sidebar with long-press row actions.

use leptos::prelude::*;

use crate::state::conversations::ConversationsState;
use crate::state::toast::{ToastState, ToastTone};

#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// How long a press must be held before the row action flyout opens.
#[cfg(feature = "hydrate")]
const LONG_PRESS_MS: u32 = 500;

#[component]
pub fn ConversationSidebar(open: RwSignal<bool>) -> impl IntoView {
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Row whose action flyout (pin/edit/delete) is open.
    let actions_for = RwSignal::new(None::<String>);
    let delete_target = RwSignal::new(None::<String>);
    let edit_target = RwSignal::new(None::<String>);
    let edit_title = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let press_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);

    let press_start = move |id: String| {
        #[cfg(feature = "hydrate")]
        press_timer.set_value(Some(gloo_timers::callback::Timeout::new(
            LONG_PRESS_MS,
            move || actions_for.set(Some(id)),
        )));
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let press_end = move || {
        #[cfg(feature = "hydrate")]
        press_timer.set_value(None);
    };

    #[cfg(feature = "hydrate")]
    on_cleanup(move || press_timer.set_value(None));

    let open_edit = move |id: String| {
        let current = conversations
            .with_untracked(|c| c.title_of(&id).unwrap_or_default().to_owned());
        edit_title.set(current);
        edit_target.set(Some(id));
        actions_for.set(None);
    };

    let confirm_edit = Callback::new(move |()| {
        if let Some(id) = edit_target.get_untracked() {
            conversations.update(|c| {
                c.rename(&id, &edit_title.get_untracked());
            });
        }
        edit_target.set(None);
        edit_title.set(String::new());
    });

    let confirm_delete = move |_| {
        if let Some(id) = delete_target.get_untracked() {
            conversations.update(|c| c.remove(&id));
        }
        delete_target.set(None);
    };

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        navigate("/auth", NavigateOptions::default());
    };

    let settings = move |_| {
        toasts.update(|t| {
            t.push("Settings", "Settings are not available in the demo", ToastTone::Info);
        });
    };

    let rows = move || {
        conversations
            .with(ConversationsState::sorted)
            .into_iter()
            .map(|conv| {
                let id = conv.id.clone();
                let select_id = id.clone();
                let press_id = id.clone();
                let pin_id = id.clone();
                let edit_id = id.clone();
                let delete_id = id.clone();
                let flyout_id = id.clone();
                let pinned = conv.pinned;
                let title = conv.title.clone();
                let active = conversations.with(|c| c.active_id == id);
                let flyout_open =
                    move || actions_for.with(|a| a.as_deref() == Some(flyout_id.as_str()));

                view! {
                    <div class="sidebar__row">
                        <button
                            class="sidebar__item"
                            class=("sidebar__item--active", active)
                            on:click=move |_| {
                                conversations.update(|c| c.select(&select_id));
                            }
                            on:mousedown=move |_| press_start(press_id.clone())
                            on:mouseup=move |_| press_end()
                            on:mouseleave=move |_| press_end()
                        >
                            <Show when=move || pinned>
                                <span class="sidebar__pin">"\u{1f4cc}"</span>
                            </Show>
                            <span class="sidebar__title">{title}</span>
                        </button>

                        <Show when=flyout_open>
                            <div class="sidebar__flyout">
                                <button
                                    class="btn btn--icon"
                                    aria-label="Pin conversation"
                                    on:click={
                                        let pin_id = pin_id.clone();
                                        move |_| {
                                            conversations.update(|c| c.toggle_pin(&pin_id));
                                            actions_for.set(None);
                                        }
                                    }
                                >
                                    "\u{1f4cc}"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    aria-label="Rename conversation"
                                    on:click={
                                        let edit_id = edit_id.clone();
                                        move |_| open_edit(edit_id.clone())
                                    }
                                >
                                    "\u{270e}"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    aria-label="Delete conversation"
                                    on:click={
                                        let delete_id = delete_id.clone();
                                        move |_| {
                                            delete_target.set(Some(delete_id.clone()));
                                            actions_for.set(None);
                                        }
                                    }
                                >
                                    "\u{1f5d1}"
                                </button>
                                <button
                                    class="btn btn--icon"
                                    aria-label="Close"
                                    on:click=move |_| actions_for.set(None)
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="sidebar" class=("sidebar--closed", move || !open.get())>
            <div class="sidebar__header">
                <h2>"Conversations"</h2>
            </div>

            <div class="sidebar__list">{rows}</div>

            <div class="sidebar__footer">
                <button class="sidebar__item" on:click=settings>
                    "Settings"
                </button>
                <button class="sidebar__item sidebar__item--destructive" on:click=sign_out>
                    "Sign Out"
                </button>
            </div>
        </aside>

        <Show when=move || delete_target.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| delete_target.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete Conversation"</h2>
                    <p class="dialog__text">
                        "Are you sure you want to delete this conversation? This action cannot be undone."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| delete_target.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn btn--destructive" on:click=confirm_delete>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || edit_target.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| edit_target.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Edit Conversation Title"</h2>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Enter new title"
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
                        <button class="btn" on:click=move |_| edit_target.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| confirm_edit.run(())>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
