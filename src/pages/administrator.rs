//! Administrator page - edit a dashboard user.

use dioxus::prelude::*;
use serde_json::Value;
use solarops_core::FormKind;

use crate::components::SchemaForm;

#[component]
pub fn Administrator() -> Element {
    rsx! {
        div { class: "single-form",
            SchemaForm {
                kind: FormKind::EditUser,
                on_submit: move |payload: Value| {
                    tracing::debug!(%payload, "user updated");
                },
            }
        }
    }
}
