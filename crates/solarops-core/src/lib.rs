//! SolarOps Core Library
//!
//! Headless model behind the solar project dashboard forms.
//!
//! ## Overview
//!
//! Every dashboard screen (sales, installation, metering, subsidy, service
//! engineer, support, godown, meta, administrator, login, create project)
//! is a schema-validated form built from one shared field control. This
//! crate holds everything about that control and its forms that does not
//! need a renderer:
//!
//! - **field**: descriptors and the closed set of variants (text-like, date, select)
//! - **state**: per-field interaction state (focus, mirrored display, label position)
//! - **validation**: declared rules and the per-field error map
//! - **schema / form**: form schemas and the authoritative `FormModel`
//! - **catalog**: the dashboard's forms as data
//!
//! ## Quick Start
//!
//! ```ignore
//! use solarops_core::{FormKind, FormModel};
//!
//! let mut form = FormModel::new(FormKind::Login.schema())?;
//! form.set_value("email", "ops@sunfield.in")?;
//! form.set_value("password", "hunter22")?;
//!
//! match form.submit() {
//!     Ok(payload) => tracing::info!(%payload, "login submitted"),
//!     Err(errors) => tracing::debug!(count = errors.len(), "login invalid"),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod field;
pub mod form;
pub mod logging;
pub mod schema;
pub mod state;
pub mod validation;

// Re-exports
pub use catalog::FormKind;
pub use error::{OpsError, OpsResult};
pub use field::{
    options, FieldDescriptor, FieldValue, FieldVariant, Glyph, InputKind, SelectOption,
};
pub use form::FormModel;
pub use schema::{FieldSpec, FormSchema, RepeatGroup, Section, SectionBody};
pub use state::{BorderTone, FieldChange, FieldPhase, FieldState, LabelPosition};
pub use validation::{validate_field, Rule, ValidationErrors};
