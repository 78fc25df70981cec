//! Form schemas
//!
//! A schema is plain data: titled sections holding either a flat list of
//! fields or one repeating row group.

use std::collections::HashSet;

use crate::error::{OpsError, OpsResult};
use crate::field::{FieldDescriptor, FieldValue, FieldVariant};
use crate::validation::Rule;

/// A named field inside a form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub descriptor: FieldDescriptor,
    pub rules: Vec<Rule>,
    pub default: FieldValue,
    /// Only shown (validated and submitted) while `sibling == value`
    pub shown_when: Option<(String, String)>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            rules: Vec::new(),
            default: FieldValue::Empty,
            shown_when: None,
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = value.into();
        self
    }

    pub fn shown_when(mut self, sibling: impl Into<String>, value: impl Into<String>) -> Self {
        self.shown_when = Some((sibling.into(), value.into()));
        self
    }

    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    pub fn variant(&self) -> &FieldVariant {
        &self.descriptor.variant
    }
}

/// A list of rows sharing the same fields (payments, panel serials, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatGroup {
    pub name: String,
    /// Heading of each row card, suffixed with the 1-based row number
    pub item_label: String,
    pub fields: Vec<FieldSpec>,
    /// Rows present on load and after a reset
    pub initial_rows: usize,
    /// Field that receives the 1-based row number when a row is appended
    pub serial_field: Option<String>,
}

impl RepeatGroup {
    pub fn new(name: impl Into<String>, item_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_label: item_label.into(),
            fields: Vec::new(),
            initial_rows: 1,
            serial_field: None,
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn serial(mut self, field: impl Into<String>) -> Self {
        self.serial_field = Some(field.into());
        self
    }

    pub fn spec(&self, field: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Fields(Vec<FieldSpec>),
    Group(RepeatGroup),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn fields(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Fields(fields),
        }
    }

    pub fn group(title: impl Into<String>, group: RepeatGroup) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Group(group),
        }
    }
}

/// Complete description of one form screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub title: String,
    pub sections: Vec<Section>,
    pub submit_label: String,
    pub reset_on_submit: bool,
}

impl FormSchema {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            submit_label: "Save Details".to_string(),
            reset_on_submit: false,
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn reset_on_submit(mut self) -> Self {
        self.reset_on_submit = true;
        self
    }

    /// Top-level fields across all sections, in order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.sections.iter().flat_map(|s| match &s.body {
            SectionBody::Fields(fields) => fields.as_slice(),
            SectionBody::Group(_) => &[][..],
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &RepeatGroup> {
        self.sections.iter().filter_map(|s| match &s.body {
            SectionBody::Group(group) => Some(group),
            SectionBody::Fields(_) => None,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&RepeatGroup> {
        self.groups().find(|g| g.name == name)
    }

    /// Check every descriptor and reject duplicate names
    pub fn check(&self) -> OpsResult<()> {
        let mut names = HashSet::new();
        for field in self.fields() {
            field.descriptor.check()?;
            if !names.insert(field.name.as_str()) {
                return Err(OpsError::DuplicateField(field.name.clone()));
            }
        }
        for group in self.groups() {
            if !names.insert(group.name.as_str()) {
                return Err(OpsError::DuplicateField(group.name.clone()));
            }
            let mut inner = HashSet::new();
            for field in &group.fields {
                field.descriptor.check()?;
                if !inner.insert(field.name.as_str()) {
                    return Err(OpsError::DuplicateField(format!(
                        "{}.{}",
                        group.name, field.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_rejected() {
        let schema = FormSchema::new("Dup").section(Section::fields(
            "A",
            vec![
                FieldSpec::new("x", FieldDescriptor::text("X")),
                FieldSpec::new("x", FieldDescriptor::text("X again")),
            ],
        ));
        assert_eq!(schema.check(), Err(OpsError::DuplicateField("x".to_string())));
    }

    #[test]
    fn invalid_select_in_group_rejected() {
        let schema = FormSchema::new("Bad").section(Section::group(
            "Rows",
            RepeatGroup::new("rows", "Row")
                .field(FieldSpec::new("kind", FieldDescriptor::select("Kind", vec![]))),
        ));
        assert!(matches!(schema.check(), Err(OpsError::InvalidDescriptor(_))));
    }

    #[test]
    fn fields_and_groups_are_split() {
        let schema = FormSchema::new("Mixed")
            .section(Section::fields(
                "Top",
                vec![FieldSpec::new("a", FieldDescriptor::text("A"))],
            ))
            .section(Section::group("Rows", RepeatGroup::new("rows", "Row")));
        assert_eq!(schema.fields().count(), 1);
        assert!(schema.group("rows").is_some());
        assert!(schema.field("rows").is_none());
    }
}
