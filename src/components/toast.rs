//! Toast outlet
//!
//! Renders the current toast from context, if any.

use dioxus::prelude::*;

use crate::context::use_toast;

#[component]
pub fn ToastView() -> Element {
    let mut toast = use_toast();

    let Some(current) = toast() else {
        return rsx! {};
    };

    rsx! {
        div { class: "toast", "role": "status",
            span { class: "toast-message", "{current.message}" }
            button {
                r#type: "button",
                class: "toast-close",
                "aria-label": "Dismiss",
                onclick: move |_| toast.set(None),
                "\u{00D7}"
            }
        }
    }
}
