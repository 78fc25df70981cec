//! SolarOps UI Components
//!
//! Dioxus components for the solar project dashboard.
//!
//! ## Design Philosophy
//!
//! One field control serves every form screen. It is a presentation and
//! synchronisation shell only:
//! - the parent form owns the value and the validation message
//! - the control owns its focus flag and a mirrored display value
//! - edits flow back through `onchange`, nothing else
//!
//! The headless state it renders lives in `solarops_core::state`.

pub mod components;

pub use components::*;
