//! Field validation
//!
//! Rules are checked in declaration order after the implicit checks that
//! follow from the field variant; the first failure is the field's message.
//! Empty values only ever fail `Required`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldDescriptor, FieldValue, FieldVariant};

/// Date format produced by native date controls
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A declared validation rule with its message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    Required(String),
    Email(String),
    MinLength(usize, String),
    Positive(String),
}

impl Rule {
    pub fn required(msg: impl Into<String>) -> Self {
        Rule::Required(msg.into())
    }

    pub fn email(msg: impl Into<String>) -> Self {
        Rule::Email(msg.into())
    }

    pub fn min_length(len: usize, msg: impl Into<String>) -> Self {
        Rule::MinLength(len, msg.into())
    }

    pub fn positive(msg: impl Into<String>) -> Self {
        Rule::Positive(msg.into())
    }

    fn check(&self, value: &FieldValue) -> Option<&str> {
        let failed = match self {
            Rule::Required(_) => value.is_empty(),
            _ if value.is_empty() => false,
            Rule::Email(_) => !looks_like_email(&value.display()),
            Rule::MinLength(len, _) => value.display().chars().count() < *len,
            Rule::Positive(_) => !value.as_number().is_some_and(|n| n > 0.0),
        };
        failed.then(|| self.message())
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required(m) | Rule::Email(m) | Rule::MinLength(_, m) | Rule::Positive(m) => m,
        }
    }
}

/// Validate one value against its descriptor and declared rules
pub fn validate_field(
    descriptor: &FieldDescriptor,
    rules: &[Rule],
    value: &FieldValue,
) -> Option<String> {
    if let Some(msg) = type_error(descriptor, value) {
        return Some(msg);
    }
    rules
        .iter()
        .find_map(|rule| rule.check(value))
        .map(str::to_string)
}

/// Implicit check that follows from the variant
fn type_error(descriptor: &FieldDescriptor, value: &FieldValue) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let label = &descriptor.label;
    match &descriptor.variant {
        FieldVariant::Text(_) if descriptor.variant.is_numeric() => value
            .as_number()
            .filter(|n| n.is_finite())
            .is_none()
            .then(|| format!("{label} must be a number")),
        FieldVariant::Date => NaiveDate::parse_from_str(&value.display(), DATE_FORMAT)
            .is_err()
            .then(|| format!("{label} must be a valid date")),
        FieldVariant::Select(options) => {
            let raw = value.display();
            (!options.iter().any(|o| o.value == raw))
                .then(|| format!("Select a valid {label}"))
        }
        FieldVariant::Text(_) => None,
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

/// Field path to message, present only for failing fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Record the outcome for one path; `None` clears it
    pub fn set(&mut self, path: impl Into<String>, outcome: Option<String>) {
        let path = path.into();
        match outcome {
            Some(msg) => {
                self.0.insert(path, msg);
            }
            None => {
                self.0.remove(&path);
            }
        }
    }

    /// Drop every error under `prefix.`
    pub fn clear_prefix(&mut self, prefix: &str) {
        let prefix = format!("{prefix}.");
        self.0.retain(|path, _| !path.starts_with(&prefix));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
