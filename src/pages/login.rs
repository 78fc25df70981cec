//! Login page - entry point of the dashboard.
//!
//! Credentials are only validated for shape; a valid submit goes straight
//! to the project view.

use dioxus::prelude::*;
use solarops_core::FormKind;

use crate::app::Route;
use crate::components::SchemaForm;
use crate::context::{get_config, use_start_pending};

/// Login page component.
///
/// Applies the `--start` page once, on first visit.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut start_pending = use_start_pending();

    use_effect(move || {
        if !*start_pending.peek() {
            return;
        }
        start_pending.set(false);
        if let Some(route) = Route::for_start(get_config().start) {
            tracing::info!(%route, "opening start page");
            navigator.replace(route);
        }
    });

    rsx! {
        main { class: "login",
            div { class: "login-card",
                SchemaForm {
                    kind: FormKind::Login,
                    on_submit: move |_| {
                        navigator.push(Route::project_home());
                    },
                }
            }
        }
    }
}
