//! Field interaction state
//!
//! The parent form owns the authoritative value and error. A field owns only
//! its transient interaction state: the focus flag and a display copy of the
//! value that mirrors the parent one way.
//!
//! ```text
//!                focus                    blur (empty)
//! UnfocusedEmpty ─────▶ Focused ──────────────────────▶ UnfocusedEmpty
//!       │                  │    blur (filled)
//!       │ external value   └──────────────────────────▶ UnfocusedFilled
//!       └─────────────────────────────────────────────▶ UnfocusedFilled
//! ```

use serde::{Deserialize, Serialize};

use crate::field::{FieldValue, FieldVariant};

/// Where the label is drawn relative to the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPosition {
    /// Overlapping the placeholder position
    Resting,
    /// Above the control, masking the border
    Floating,
}

/// Border palette of the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderTone {
    Neutral,
    Focused,
    Error,
}

/// Observable phase of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPhase {
    UnfocusedEmpty,
    Focused,
    UnfocusedFilled,
}

/// Change notification handed to the parent on every edit.
///
/// Mirrors the native `{ target: { value } }` event shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub name: Option<String>,
    pub value: String,
}

/// Interaction state owned by a single field instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    display: String,
    focused: bool,
    error: Option<String>,
    last_external: Option<FieldValue>,
    name: Option<String>,
}

impl FieldState {
    /// Mount with an initial external value (possibly absent)
    pub fn new(initial: Option<FieldValue>) -> Self {
        Self {
            display: initial.as_ref().map(FieldValue::display).unwrap_or_default(),
            focused: false,
            error: None,
            last_external: initial,
            name: None,
        }
    }

    /// Name carried on emitted change events
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Apply one keystroke or selection.
    ///
    /// The display reflects the edit before the parent re-renders; the
    /// returned change must be forwarded exactly once.
    pub fn input(&mut self, raw: impl Into<String>) -> FieldChange {
        let value = raw.into();
        self.display = value.clone();
        FieldChange {
            name: self.name.clone(),
            value,
        }
    }

    /// Mirror the parent's value into the display.
    ///
    /// Only a value that differs from the last external value is applied,
    /// focused or not, so re-applying the same value is a no-op. Returns
    /// whether the display was overwritten.
    pub fn sync_external(&mut self, value: Option<FieldValue>) -> bool {
        if self.last_external == value {
            return false;
        }
        self.display = value.as_ref().map(FieldValue::display).unwrap_or_default();
        self.last_external = value;
        true
    }

    /// Set the externally computed error; an empty message counts as absent
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error.filter(|e| !e.is_empty());
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> FieldPhase {
        match (self.focused, self.is_empty()) {
            (true, _) => FieldPhase::Focused,
            (false, true) => FieldPhase::UnfocusedEmpty,
            (false, false) => FieldPhase::UnfocusedFilled,
        }
    }

    pub fn label_position(&self, variant: &FieldVariant) -> LabelPosition {
        if variant.always_floats() || self.focused || !self.is_empty() {
            LabelPosition::Floating
        } else {
            LabelPosition::Resting
        }
    }

    pub fn border_tone(&self) -> BorderTone {
        if self.error.is_some() {
            BorderTone::Error
        } else if self.focused {
            BorderTone::Focused
        } else {
            BorderTone::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::InputKind;

    #[test]
    fn mount_empty_is_resting() {
        let state = FieldState::new(None);
        assert_eq!(state.phase(), FieldPhase::UnfocusedEmpty);
        assert_eq!(
            state.label_position(&FieldVariant::default()),
            LabelPosition::Resting
        );
        assert_eq!(state.border_tone(), BorderTone::Neutral);
    }

    #[test]
    fn focus_blur_transitions() {
        let mut state = FieldState::new(None);
        state.focus();
        assert_eq!(state.phase(), FieldPhase::Focused);
        assert_eq!(state.border_tone(), BorderTone::Focused);

        state.blur();
        assert_eq!(state.phase(), FieldPhase::UnfocusedEmpty);

        state.focus();
        state.input("Ravi");
        state.blur();
        assert_eq!(state.phase(), FieldPhase::UnfocusedFilled);

        state.input("");
        assert_eq!(state.phase(), FieldPhase::UnfocusedEmpty);
    }

    #[test]
    fn external_value_while_unfocused_fills() {
        let mut state = FieldState::new(None);
        assert!(state.sync_external(Some(FieldValue::from("Pune"))));
        assert_eq!(state.display(), "Pune");
        assert_eq!(state.phase(), FieldPhase::UnfocusedFilled);
    }

    #[test]
    fn resync_same_value_is_noop() {
        let mut state = FieldState::new(Some(FieldValue::from("a")));
        state.input("ab");
        // Parent re-renders with the value it already supplied
        assert!(!state.sync_external(Some(FieldValue::from("a"))));
        assert_eq!(state.display(), "ab");
    }

    #[test]
    fn focused_field_still_takes_external_value() {
        let mut state = FieldState::new(None);
        state.focus();
        state.input("12");
        assert!(state.sync_external(Some(FieldValue::Number(15.0))));
        assert_eq!(state.display(), "15");
        assert!(state.is_focused());
    }

    #[test]
    fn input_emits_raw_value_with_name() {
        let mut state = FieldState::new(None).with_name(Some("email".to_string()));
        let change = state.input("a@b.co");
        assert_eq!(
            change,
            FieldChange {
                name: Some("email".to_string()),
                value: "a@b.co".to_string()
            }
        );
    }

    #[test]
    fn error_wins_over_focus_and_empty_error_is_absent() {
        let mut state = FieldState::new(None);
        state.focus();
        state.set_error(Some("Email is required".to_string()));
        assert_eq!(state.border_tone(), BorderTone::Error);
        assert_eq!(state.error(), Some("Email is required"));

        state.set_error(Some(String::new()));
        assert_eq!(state.error(), None);
        assert_eq!(state.border_tone(), BorderTone::Focused);
    }

    #[test]
    fn password_follows_focus_or_value_rule() {
        let variant = FieldVariant::Text(InputKind::Password);
        let mut state = FieldState::new(None);
        assert_eq!(state.label_position(&variant), LabelPosition::Resting);
        state.input("secret");
        assert_eq!(state.label_position(&variant), LabelPosition::Floating);
    }
}
