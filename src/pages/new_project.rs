//! Create project page.

use dioxus::prelude::*;
use solarops_core::FormKind;

use crate::app::Route;
use crate::components::SchemaForm;

#[component]
pub fn NewProject() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "single-form",
            SchemaForm {
                kind: FormKind::CreateProject,
                on_submit: move |_| {
                    navigator.push(Route::project_home());
                },
            }
        }
    }
}
