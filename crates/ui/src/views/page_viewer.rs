use dioxus::prelude::*;
use dioxus_router::Link;
use revision_core::model::{ImageLoadState, PageSelection};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ErrorAlert;
use crate::vm::PageViewerVm;

#[cfg(test)]
use super::test_harness::ViewTestHandles;

const LINK_ERROR_TITLE: &str = "Could not open the word-by-word translation link";

#[component]
pub fn PageViewerView(selection: PageSelection) -> Element {
    let ctx = use_context::<AppContext>();
    let coordinator = ctx.coordinator();
    let link_opener = ctx.link_opener();
    let mut vm = use_signal(move || {
        let image_url = coordinator.resolve_image_url(selection.image_reference());
        PageViewerVm::new(selection, image_url)
    });
    let mut link_error = use_signal(|| None::<String>);

    let open_link = use_callback(move |()| {
        let Some(link) = vm.read().word_by_word_link().cloned() else {
            return;
        };
        let link_opener = link_opener.clone();
        spawn(async move {
            if let Err(err) = link_opener.open(&link).await {
                tracing::warn!(error = %err, %link, "word-by-word link did not open");
                link_error.set(Some(err.to_string()));
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ViewTestHandles>() {
                handles.register_open_link(open_link);
            }
        }
    }

    let current = vm.read().clone();
    let page = current.selection().page_number();
    let titles = current.selection().surah_titles().to_string();
    let image_url = current.image_url().to_string();
    let attempt = current.attempt();
    let wbw_link = current.word_by_word_link().map(ToString::to_string);

    rsx! {
        div { class: "page viewer",
            div { class: "card page-header",
                h2 { "Page {page}" }
                p { class: "surah-titles", "{titles}" }
            }

            div { class: "card image-container",
                match current.image_state() {
                    ImageLoadState::Failed => rsx! {
                        div { class: "image-error",
                            p { "Failed to load image" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| {
                                    vm.write().retry();
                                },
                                "Retry"
                            }
                        }
                    },
                    state => rsx! {
                        if state == ImageLoadState::Pending {
                            div { class: "image-loading",
                                p { "Loading page..." }
                            }
                        }
                        img {
                            key: "{attempt}",
                            class: "page-image",
                            src: "{image_url}",
                            alt: "Page {page}",
                            onload: move |_| {
                                vm.write().image_loaded();
                            },
                            onerror: move |_| {
                                vm.write().image_failed("image element reported an error");
                            },
                        }
                    },
                }
            }

            div { class: "actions",
                if let Some(link) = wbw_link {
                    a {
                        class: "btn wbw-link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        onclick: move |evt| {
                            evt.prevent_default();
                            open_link.call(());
                        },
                        "View Word-by-Word Translation"
                    }
                }
                Link { class: "btn", to: Route::Home {}, "Generate Another Page" }
            }

            if let Some(message) = link_error() {
                ErrorAlert {
                    title: LINK_ERROR_TITLE.to_string(),
                    message,
                    on_dismiss: move |()| link_error.set(None),
                }
            }
        }
    }
}
