//! Report dialog for a generated image: reason, description, and an
//! optional evidence screenshot.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastTone};

const REPORT_REASONS: [(&str, &str); 5] = [
    ("inappropriate", "Inappropriate Content"),
    ("copyright", "Copyright Violation"),
    ("quality", "Quality Issue"),
    ("offensive", "Offensive Content"),
    ("other", "Other"),
];

#[component]
pub fn ReportDialog(open: RwSignal<bool>, image_id: String) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let reason = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let evidence = RwSignal::new(None::<String>);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let pick_evidence = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_evidence = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    evidence.set(Some(url));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let submit = Callback::new(move |()| {
        if reason.with(String::is_empty) || description.with(|d| d.trim().is_empty()) {
            toasts.update(|t| {
                t.push(
                    "Incomplete form",
                    "Please select a report type and provide a description",
                    ToastTone::Destructive,
                );
            });
            return;
        }

        leptos::logging::log!(
            "report submitted for image {image_id}: {}",
            reason.get_untracked()
        );
        toasts.update(|t| {
            t.push(
                "Report submitted",
                "Thank you for your feedback. We'll review this shortly.",
                ToastTone::Success,
            );
        });

        reason.set(String::new());
        description.set(String::new());
        evidence.set(None);
        open.set(false);
    });

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Report Image"</h2>

                    <label class="dialog__label">
                        "Report Type"
                        <select
                            class="dialog__input"
                            prop:value=move || reason.get()
                            on:change=move |ev| reason.set(event_target_value(&ev))
                        >
                            <option value="" disabled selected>
                                "Select a reason"
                            </option>
                            {REPORT_REASONS
                                .iter()
                                .map(|(value, label)| {
                                    view! { <option value=*value>{*label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__textarea"
                            placeholder="Please provide details about the issue..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__label">
                        "Evidence (Optional)"
                        <input
                            class="report__file"
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=on_evidence
                        />
                        <button class="btn btn--outline" on:click=pick_evidence>
                            {move || {
                                if evidence.with(Option::is_some) {
                                    "Change Evidence"
                                } else {
                                    "Upload Evidence"
                                }
                            }}
                        </button>
                        <Show when=move || evidence.with(Option::is_some)>
                            <img
                                class="report__evidence"
                                src=move || evidence.get().unwrap_or_default()
                                alt="Evidence"
                            />
                        </Show>
                    </div>

                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| submit.run(())>
                            "Submit Report"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
