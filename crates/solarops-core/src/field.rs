//! Field descriptors
//!
//! A field is described once (label, variant, placeholder, icon) and the
//! variant decides which of the three render branches a control uses:
//! select, date, or the single-line default branch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{OpsError, OpsResult};

/// Value held by a field.
///
/// `Empty` is the unselected/blank sentinel (`""` in the native control).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Wrap raw control text without any variant-specific conversion
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(raw)
        }
    }

    /// Convert raw control text the way the given variant stores it.
    ///
    /// Number inputs keep unparseable text as `Text` so validation can
    /// report it instead of silently dropping the keystroke.
    pub fn parse_for(variant: &FieldVariant, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            return FieldValue::Empty;
        }
        if let FieldVariant::Text(InputKind::Number) = variant {
            if let Some(n) = raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()) {
                return FieldValue::Number(n);
            }
        }
        FieldValue::Text(raw)
    }

    /// Text shown inside the native control
    pub fn display(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Empty => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::from_raw(s)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::from_raw(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

/// Native `type` attribute of the default (single-line) branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    #[default]
    Text,
    Number,
    Password,
    Email,
    Tel,
    /// Any other native type, passed through verbatim
    Other(String),
}

impl InputKind {
    pub fn as_str(&self) -> &str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Password => "password",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Other(s) => s.as_str(),
        }
    }

    pub fn from_type(ty: &str) -> Self {
        match ty {
            "" | "text" => InputKind::Text,
            "number" => InputKind::Number,
            "password" => InputKind::Password,
            "email" => InputKind::Email,
            "tel" => InputKind::Tel,
            other => InputKind::Other(other.to_string()),
        }
    }
}

/// One selectable `{value, title}` pair of a select field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub title: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
        }
    }
}

/// Build an option list from `(value, title)` pairs
pub fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, title)| SelectOption::new(*value, *title))
        .collect()
}

/// Rendering mode of a field.
///
/// Closed over the three render branches; the default branch carries the
/// native input type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldVariant {
    Text(InputKind),
    Date,
    Select(Vec<SelectOption>),
}

impl Default for FieldVariant {
    fn default() -> Self {
        FieldVariant::Text(InputKind::Text)
    }
}

impl FieldVariant {
    /// Dispatch a loosely typed `type="..."` discriminator.
    ///
    /// `options` is only consulted for `"select"`.
    pub fn from_type(ty: Option<&str>, options: Vec<SelectOption>) -> Self {
        match ty {
            Some("select") => FieldVariant::Select(options),
            Some("date") => FieldVariant::Date,
            Some(other) => FieldVariant::Text(InputKind::from_type(other)),
            None => FieldVariant::default(),
        }
    }

    pub fn number() -> Self {
        FieldVariant::Text(InputKind::Number)
    }

    /// Native date and select controls cannot share a baseline with a
    /// resting label, so their label is always floated.
    pub fn always_floats(&self) -> bool {
        matches!(self, FieldVariant::Date | FieldVariant::Select(_))
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            FieldVariant::Select(options) => options,
            _ => &[],
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldVariant::Text(InputKind::Number))
    }
}

/// Leading icons and decorative glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Mail,
    User,
    Building,
    MapPin,
    Phone,
    Lock,
    Calendar,
    ChevronDown,
    AlertCircle,
    Plus,
    Trash,
}

impl Glyph {
    /// Character used to draw the glyph
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Mail => "\u{2709}",
            Glyph::User => "\u{1F464}",
            Glyph::Building => "\u{1F3E2}",
            Glyph::MapPin => "\u{1F4CD}",
            Glyph::Phone => "\u{260E}",
            Glyph::Lock => "\u{1F512}",
            Glyph::Calendar => "\u{1F4C5}",
            Glyph::ChevronDown => "\u{25BE}",
            Glyph::AlertCircle => "\u{26A0}",
            Glyph::Plus => "+",
            Glyph::Trash => "\u{1F5D1}",
        }
    }
}

/// Static description of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub label: String,
    pub variant: FieldVariant,
    pub placeholder: Option<String>,
    pub icon: Option<Glyph>,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>, variant: FieldVariant) -> Self {
        Self {
            label: label.into(),
            variant,
            placeholder: None,
            icon: None,
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, FieldVariant::default())
    }

    pub fn number(label: impl Into<String>) -> Self {
        Self::new(label, FieldVariant::number())
    }

    pub fn date(label: impl Into<String>) -> Self {
        Self::new(label, FieldVariant::Date)
    }

    pub fn select(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self::new(label, FieldVariant::Select(options))
    }

    pub fn kind(label: impl Into<String>, kind: InputKind) -> Self {
        Self::new(label, FieldVariant::Text(kind))
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_icon(mut self, icon: Glyph) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Check the select invariants: options non-empty, values unique.
    ///
    /// Rendering never calls this; it is the caller's contract.
    pub fn check(&self) -> OpsResult<()> {
        if let FieldVariant::Select(options) = &self.variant {
            if options.is_empty() {
                return Err(OpsError::InvalidDescriptor(format!(
                    "select '{}' has no options",
                    self.label
                )));
            }
            let mut seen = HashSet::new();
            for option in options {
                if !seen.insert(option.value.as_str()) {
                    return Err(OpsError::InvalidDescriptor(format!(
                        "select '{}' repeats option value '{}'",
                        self.label, option.value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rendered choice list for select fields.
    ///
    /// A leading `""` sentinel titled "Select {label}" precedes the options
    /// in their given order. Other variants have no choices.
    pub fn choices(&self) -> Vec<SelectOption> {
        match &self.variant {
            FieldVariant::Select(options) => {
                let mut choices = Vec::with_capacity(options.len() + 1);
                choices.push(SelectOption::new("", format!("Select {}", self.label)));
                choices.extend(options.iter().cloned());
                choices
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_type_dispatch() {
        assert_eq!(FieldVariant::from_type(None, vec![]), FieldVariant::default());
        assert_eq!(FieldVariant::from_type(Some("date"), vec![]), FieldVariant::Date);
        assert_eq!(
            FieldVariant::from_type(Some("number"), vec![]),
            FieldVariant::Text(InputKind::Number)
        );
        assert_eq!(
            FieldVariant::from_type(Some("datetime-local"), vec![]),
            FieldVariant::Text(InputKind::Other("datetime-local".to_string()))
        );
        let opts = options(&[("a", "A")]);
        assert_eq!(
            FieldVariant::from_type(Some("select"), opts.clone()),
            FieldVariant::Select(opts)
        );
    }

    #[test]
    fn input_kind_passes_through_verbatim() {
        for ty in ["text", "number", "password", "email", "tel", "url", "time"] {
            assert_eq!(InputKind::from_type(ty).as_str(), ty);
        }
    }

    #[test]
    fn always_floats_only_for_date_and_select() {
        assert!(FieldVariant::Date.always_floats());
        assert!(FieldVariant::Select(vec![]).always_floats());
        assert!(!FieldVariant::default().always_floats());
        assert!(!FieldVariant::number().always_floats());
        assert!(!FieldVariant::Text(InputKind::Password).always_floats());
    }

    #[test]
    fn parse_for_number_variant() {
        let v = FieldVariant::number();
        assert_eq!(FieldValue::parse_for(&v, "12.5"), FieldValue::Number(12.5));
        assert_eq!(FieldValue::parse_for(&v, ""), FieldValue::Empty);
        assert_eq!(
            FieldValue::parse_for(&v, "12kw"),
            FieldValue::Text("12kw".to_string())
        );
        assert_eq!(
            FieldValue::parse_for(&v, "NaN"),
            FieldValue::Text("NaN".to_string())
        );
        // Text variants never convert
        assert_eq!(
            FieldValue::parse_for(&FieldVariant::default(), "42"),
            FieldValue::Text("42".to_string())
        );
    }

    #[test]
    fn number_display_drops_trailing_zero() {
        assert_eq!(FieldValue::Number(5.0).display(), "5");
        assert_eq!(FieldValue::Number(2.5).display(), "2.5");
        assert_eq!(FieldValue::Empty.display(), "");
    }

    #[test]
    fn choices_lead_with_sentinel() {
        let d = FieldDescriptor::select("Role", options(&[("A", "Alpha"), ("B", "Beta")]));
        let titles: Vec<_> = d.choices().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Select Role", "Alpha", "Beta"]);
        assert_eq!(d.choices()[0].value, "");
        assert!(FieldDescriptor::text("Name").choices().is_empty());
    }

    #[test]
    fn check_rejects_empty_and_duplicate_options() {
        assert!(FieldDescriptor::select("Role", vec![]).check().is_err());
        let dup = FieldDescriptor::select("Role", options(&[("a", "A"), ("a", "Again")]));
        assert!(matches!(dup.check(), Err(OpsError::InvalidDescriptor(_))));
        assert!(FieldDescriptor::text("Name").check().is_ok());
    }
}
