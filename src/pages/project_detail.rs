//! Project detail page - one tab per operational form.

use dioxus::prelude::*;
use serde_json::Value;
use solarops_core::FormKind;

use crate::app::Route;
use crate::components::SchemaForm;

/// Project detail page component.
///
/// `tab` is a form slug; unknown or non-project slugs render a notice.
#[component]
pub fn ProjectDetail(tab: String) -> Element {
    let active = FormKind::from_slug(&tab)
        .ok()
        .filter(|kind| FormKind::project_tabs().contains(kind));

    rsx! {
        div { class: "project-detail",
            nav { class: "tabs",
                for kind in FormKind::project_tabs().iter().copied() {
                    Link {
                        to: Route::ProjectDetail { tab: kind.slug().to_string() },
                        class: if Some(kind) == active { "tab active" } else { "tab" },
                        "{kind.tab_label()}"
                    }
                }
            }

            div { class: "tab-panel",
                if let Some(kind) = active {
                    SchemaForm {
                        key: "{kind.slug()}",
                        kind,
                        on_submit: move |payload: Value| {
                            tracing::debug!(form = %kind, %payload, "project form saved");
                        },
                    }
                } else {
                    p { class: "notice", "Unknown tab \"{tab}\"." }
                }
            }
        }
    }
}
