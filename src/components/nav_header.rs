//! Navigation Header Component
//!
//! Horizontal header with the app title, section links and logout.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Projects,
    NewProject,
    Administrator,
    Meta,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Projects,
        NavLocation::NewProject,
        NavLocation::Administrator,
        NavLocation::Meta,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Projects => "Projects",
            NavLocation::NewProject => "New Project",
            NavLocation::Administrator => "Administrator",
            NavLocation::Meta => "Meta",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Projects => Route::project_home(),
            NavLocation::NewProject => Route::NewProject {},
            NavLocation::Administrator => Route::Administrator {},
            NavLocation::Meta => Route::Meta {},
        }
    }

    /// Location that owns `route`, if any
    pub fn of(route: &Route) -> Option<Self> {
        match route {
            Route::ProjectDetail { .. } => Some(NavLocation::Projects),
            Route::NewProject {} => Some(NavLocation::NewProject),
            Route::Administrator {} => Some(NavLocation::Administrator),
            Route::Meta {} => Some(NavLocation::Meta),
            Route::Login {} => None,
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let current = NavLocation::of(&use_route::<Route>());

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "app-title", "SolarOps" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if Some(location) == current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }

                Link { to: Route::Login {}, class: "nav-logout", "Logout" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_owns_its_route() {
        for location in NavLocation::ALL {
            assert_eq!(NavLocation::of(&location.route()), Some(location));
        }
        assert_eq!(NavLocation::of(&Route::Login {}), None);
    }
}
