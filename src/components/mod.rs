//! App-level components for SolarOps.

mod nav_header;
mod schema_form;
mod toast;

pub use nav_header::NavHeader;
pub use schema_form::SchemaForm;
pub use toast::ToastView;
