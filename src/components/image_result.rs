//! One generated-image card: caption, overflow menu, the image itself with
//! a load-progress overlay, and style/size tags.

use leptos::prelude::*;

use crate::components::image_viewer::ImageViewer;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::report_dialog::ReportDialog;
use crate::net::types::GeneratedImage;

#[cfg(feature = "hydrate")]
use crate::state::toast::{ToastState, ToastTone};

#[component]
pub fn ImageResult(
    image: GeneratedImage,
    #[prop(into)] on_recreate: Callback<()>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let show_menu = RwSignal::new(false);
    let show_viewer = RwSignal::new(false);
    let show_report = RwSignal::new(false);
    let progress = RwSignal::new(0_u32);

    // Simulated load progress so the overlay animates even for cached
    // images; the real load event snaps it to done.
    #[cfg(feature = "hydrate")]
    {
        let ticker = StoredValue::new_local(Some(gloo_timers::callback::Interval::new(
            50,
            move || progress.update(|p| *p = (*p + 2).min(100)),
        )));
        Effect::new(move || {
            if progress.get() >= 100 {
                ticker.set_value(None);
            }
        });
        on_cleanup(move || ticker.set_value(None));
    }

    let url = image.url.clone();
    let viewer_url = image.url.clone();
    let file_name = format!("generated-{}.png", image.id);
    let image_id = image.id.clone();

    let download = move |_| {
        show_menu.set(false);
        #[cfg(feature = "hydrate")]
        {
            let url = url.clone();
            let file_name = file_name.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::util::download::save_image(&url, &file_name).await {
                    leptos::logging::warn!("download failed: {err}");
                    toasts.update(|t| {
                        t.push("Download failed", "Could not save the image", ToastTone::Destructive);
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&url, &file_name);
        }
    };

    view! {
        <div class="image-result">
            <div class="image-result__caption">
                <span class="image-result__prompt">{image.prompt.clone()}</span>
                <div class="image-result__menu">
                    <button
                        class="btn btn--icon"
                        aria-label="Image options"
                        on:click=move |_| show_menu.update(|v| *v = !*v)
                    >
                        "\u{22ee}"
                    </button>
                    <Show when=move || show_menu.get()>
                        <div class="image-result__dropdown">
                            <button class="image-result__action" on:click=download.clone()>
                                "Download"
                            </button>
                            <button
                                class="image-result__action"
                                on:click=move |_| {
                                    show_menu.set(false);
                                    on_recreate.run(());
                                }
                            >
                                "Recreate"
                            </button>
                            <button
                                class="image-result__action"
                                on:click=move |_| {
                                    show_menu.set(false);
                                    show_report.set(true);
                                }
                            >
                                "Report"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="image-result__frame" on:click=move |_| show_viewer.set(true)>
                <Show when=move || progress.get() < 100>
                    <LoadingOverlay progress=progress/>
                </Show>
                <img
                    class="image-result__image"
                    src=image.url.clone()
                    alt=image.prompt.clone()
                    on:load=move |_| progress.set(100)
                />
            </div>

            <div class="image-result__tags">
                {image
                    .style
                    .clone()
                    .map(|style| view! { <span class="image-result__tag">{style}</span> })}
                <span class="image-result__tag">{image.size_label.clone()}</span>
            </div>

            <ImageViewer open=show_viewer image_url=viewer_url/>
            <ReportDialog open=show_report image_id=image_id/>
        </div>
    }
}
