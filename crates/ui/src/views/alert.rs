use dioxus::prelude::*;

/// Blocking notification naming the failed action.
#[component]
pub fn ErrorAlert(title: String, message: String, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            role: "alertdialog",
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Error" }
                p { class: "modal-action", "{title}" }
                p { class: "modal-body", "{message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
