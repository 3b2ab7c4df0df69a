use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use revision_core::model::GenerationOutcome;
use services::{GenerationReport, GenerationTrigger};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorAlert, ProgressBar, spawn_progress_refresh, use_progress_store};

#[cfg(test)]
use super::test_harness::ViewTestHandles;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let coordinator = ctx.coordinator();
    let mut progress = use_progress_store();
    let mut generating = use_signal(|| false);
    let mut generation_error = use_signal(|| None::<String>);

    let coordinator_for_mount = coordinator.clone();
    use_hook(move || spawn_progress_refresh(progress, coordinator_for_mount.refresh_progress()));

    let on_generate = use_callback(move |()| {
        let coordinator = coordinator.clone();
        spawn(async move {
            generating.set(true);
            let GenerationReport { trigger, refresh } = coordinator.generate().await;
            // A busy trigger leaves the flag to the request still in flight.
            let GenerationTrigger::Completed(outcome) = trigger else {
                return;
            };
            generating.set(false);

            match outcome {
                GenerationOutcome::Success(selection) => {
                    navigator.push(Route::PageViewer { selection });
                    if let Some(refresh) = refresh {
                        spawn_progress_refresh(progress, refresh);
                    }
                }
                GenerationOutcome::Failure { message } => {
                    generation_error.set(Some(message));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ViewTestHandles>() {
                handles.register_generate(on_generate);
            }
        }
    }

    let vm = progress.read().clone();
    let snapshot = vm.snapshot();
    let show_spinner = vm.is_loading() && snapshot.is_none();
    let progress_error = vm.error();
    let busy = generating();

    rsx! {
        div { class: "page home",
            div { class: "page-header",
                h2 { "Quranic Arabic Revision" }
                p { class: "subtitle", "Track your progress through the Quran" }
            }

            section { class: "card progress-card",
                h3 { "Your Progress" }
                if show_spinner {
                    p { class: "loading", "Loading progress..." }
                } else if let Some(snapshot) = snapshot {
                    ProgressBar { width: snapshot.bar_width(), tier: None }
                    p { class: "progress-text", "{snapshot.summary_line()}" }
                } else {
                    p { class: "progress-text", "Progress unavailable." }
                }
            }

            button {
                class: "btn btn-primary generate",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_generate.call(()),
                if busy { "Generating..." } else { "Generate Random Page" }
            }

            Link { class: "btn progress-link", to: Route::Progress {}, "View Detailed Progress" }

            if let Some(message) = generation_error() {
                ErrorAlert {
                    title: "Could not generate a page.",
                    message,
                    on_dismiss: move |()| generation_error.set(None),
                }
            } else if let Some(err) = progress_error {
                ErrorAlert {
                    title: "Could not load progress.",
                    message: err.message(),
                    on_dismiss: move |()| progress.write().dismiss_error(),
                }
            }
        }
    }
}
