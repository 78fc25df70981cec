//! Page components for SolarOps.

mod administrator;
mod login;
mod meta;
mod new_project;
mod project_detail;

pub use administrator::Administrator;
pub use login::Login;
pub use meta::Meta;
pub use new_project::NewProject;
pub use project_detail::ProjectDetail;
