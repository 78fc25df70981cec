use dioxus::prelude::*;
use solarops_core::FormKind;

use crate::components::{NavHeader, ToastView};
use crate::context::Toast;
use crate::pages::{Administrator, Login, Meta, NewProject, ProjectDetail};
use crate::theme::GLOBAL_STYLES;
use crate::StartPage;

/// Application routes.
///
/// - `/` - Login
/// - `/project/:tab` - Project detail with one tab per operational form
/// - `/projects/new` - Create project
/// - `/meta` - Meta entries
/// - `/administrator` - Edit user
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(Shell)]
        #[route("/project/:tab")]
        ProjectDetail { tab: String },
        #[route("/projects/new")]
        NewProject {},
        #[route("/meta")]
        Meta {},
        #[route("/administrator")]
        Administrator {},
}

impl Route {
    /// First project tab
    pub fn project_home() -> Self {
        let tab = FormKind::project_tabs()
            .first()
            .copied()
            .unwrap_or(FormKind::Sales);
        Route::ProjectDetail {
            tab: tab.slug().to_string(),
        }
    }

    /// Route for a `--start` page, `None` for the login page itself
    pub fn for_start(start: StartPage) -> Option<Self> {
        match start {
            StartPage::Login => None,
            StartPage::Project => Some(Route::project_home()),
            StartPage::Meta => Some(Route::Meta {}),
            StartPage::Administrator => Some(Route::Administrator {}),
            StartPage::NewProject => Some(Route::NewProject {}),
        }
    }
}

/// Root application component.
///
/// Provides global styles, toast and start-page context, and routing.
#[component]
pub fn App() -> Element {
    let toast: Signal<Option<Toast>> = use_signal(|| None);
    let start_pending: Signal<bool> = use_signal(|| true);

    use_context_provider(|| toast);
    use_context_provider(|| start_pending);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout for every signed-in page: header, page body, toast.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app-shell",
            NavHeader {}
            main { class: "page-body",
                Outlet::<Route> {}
            }
            ToastView {}
        }
    }
}
