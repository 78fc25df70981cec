//! Form orchestration
//!
//! `FormModel` owns the authoritative copy of every field value and the
//! current validation result. Controls read `value(path)` / `error(path)`
//! and write back through `set_value(path, raw)`.
//!
//! Paths are either a top-level field name (`customerName`,
//! `wireDetails.acWire`) or a row path into a repeat group
//! (`paymentDetails.0.amount`).
//!
//! Validation runs on submit; once a submit has been attempted every change
//! re-validates the edited path.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{OpsError, OpsResult};
use crate::field::{FieldValue, FieldVariant};
use crate::schema::{FieldSpec, FormSchema, RepeatGroup, SectionBody};
use crate::validation::{validate_field, ValidationErrors};

type Row = BTreeMap<String, FieldValue>;

/// Resolved path
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Field(String),
    Row {
        group: String,
        index: usize,
        field: String,
    },
}

/// Authoritative form state
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    schema: FormSchema,
    values: BTreeMap<String, FieldValue>,
    rows: BTreeMap<String, Vec<Row>>,
    errors: ValidationErrors,
    submitted: bool,
}

impl FormModel {
    /// Register every field of `schema` with its default value
    pub fn new(schema: FormSchema) -> OpsResult<Self> {
        schema.check()?;
        let mut model = Self {
            schema,
            values: BTreeMap::new(),
            rows: BTreeMap::new(),
            errors: ValidationErrors::new(),
            submitted: false,
        };
        model.reset();
        Ok(model)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn has_submitted(&self) -> bool {
        self.submitted
    }

    /// Restore defaults and initial rows, forget errors and the submit attempt
    pub fn reset(&mut self) {
        self.values = self
            .schema
            .fields()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect();
        self.rows = self
            .schema
            .groups()
            .map(|g| {
                let rows = (0..g.initial_rows).map(|i| default_row(g, i)).collect();
                (g.name.clone(), rows)
            })
            .collect();
        self.errors.clear();
        self.submitted = false;
    }

    pub fn value(&self, path: &str) -> Option<&FieldValue> {
        match self.resolve(path).ok()? {
            Target::Field(name) => self.values.get(&name),
            Target::Row {
                group,
                index,
                field,
            } => self.rows.get(&group)?.get(index)?.get(&field),
        }
    }

    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path)
    }

    /// Store raw control text for `path`.
    ///
    /// Values are kept as typed so that partial input such as `"1."` in a
    /// number field survives the round trip to the control; conversion
    /// happens in validation and in the submitted payload.
    pub fn set_value(&mut self, path: &str, raw: impl Into<String>) -> OpsResult<()> {
        let target = self.resolve(path)?;
        let value = FieldValue::from_raw(raw);
        match &target {
            Target::Field(name) => {
                self.values.insert(name.clone(), value);
            }
            Target::Row {
                group,
                index,
                field,
            } => {
                if let Some(row) = self.rows.get_mut(group).and_then(|r| r.get_mut(*index)) {
                    row.insert(field.clone(), value);
                }
            }
        }
        tracing::trace!(form = %self.schema.title, path, "field value set");

        if self.submitted {
            self.revalidate(path, &target);
            self.drop_hidden_errors();
        }
        Ok(())
    }

    /// Whether a conditional field is currently shown
    pub fn is_shown(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(target) => self.target_shown(&target),
            Err(_) => false,
        }
    }

    /// Every shown path in display order: section by section, rows in order
    pub fn shown_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for section in &self.schema.sections {
            match &section.body {
                SectionBody::Fields(fields) => {
                    paths.extend(
                        fields
                            .iter()
                            .map(|f| f.name.clone())
                            .filter(|path| self.is_shown(path)),
                    );
                }
                SectionBody::Group(group) => {
                    for index in 0..self.row_count(&group.name) {
                        for spec in &group.fields {
                            let path = format!("{}.{}.{}", group.name, index, spec.name);
                            if self.is_shown(&path) {
                                paths.push(path);
                            }
                        }
                    }
                }
            }
        }
        paths
    }

    /// First field carrying an error, in display order rather than path order
    pub fn first_error_path(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        self.shown_paths()
            .into_iter()
            .find(|path| self.errors.contains(path))
    }

    pub fn row_count(&self, group: &str) -> usize {
        self.rows.get(group).map_or(0, Vec::len)
    }

    /// Append a row with default values; returns its index
    pub fn append_row(&mut self, group: &str) -> OpsResult<usize> {
        let spec = self
            .schema
            .group(group)
            .ok_or_else(|| OpsError::UnknownGroup(group.to_string()))?;
        let rows = self.rows.entry(group.to_string()).or_default();
        let index = rows.len();
        rows.push(default_row(spec, index));
        tracing::debug!(form = %self.schema.title, group, index, "row appended");
        Ok(index)
    }

    /// Remove a row; later rows shift down by one
    pub fn remove_row(&mut self, group: &str, index: usize) -> OpsResult<()> {
        if self.schema.group(group).is_none() {
            return Err(OpsError::UnknownGroup(group.to_string()));
        }
        let rows = self.rows.entry(group.to_string()).or_default();
        if index >= rows.len() {
            return Err(OpsError::RowOutOfRange {
                group: group.to_string(),
                index,
                len: rows.len(),
            });
        }
        rows.remove(index);
        tracing::debug!(form = %self.schema.title, group, index, "row removed");

        // Row paths shifted, so the old keys are stale
        if self.submitted {
            self.validate();
        } else {
            self.errors.clear_prefix(group);
        }
        Ok(())
    }

    /// Validate every shown field
    pub fn validate(&mut self) -> &ValidationErrors {
        let mut errors = ValidationErrors::new();
        for spec in self.schema.fields() {
            let target = Target::Field(spec.name.clone());
            if self.target_shown(&target) {
                let value = self.values.get(&spec.name).cloned().unwrap_or_default();
                errors.set(spec.name.clone(), check(spec, &value));
            }
        }
        for group in self.schema.groups() {
            let rows = self.rows.get(&group.name).map_or(&[][..], Vec::as_slice);
            for (index, row) in rows.iter().enumerate() {
                for spec in &group.fields {
                    if !row_field_shown(spec, row) {
                        continue;
                    }
                    let value = row.get(&spec.name).cloned().unwrap_or_default();
                    errors.set(
                        format!("{}.{}.{}", group.name, index, spec.name),
                        check(spec, &value),
                    );
                }
            }
        }
        self.errors = errors;
        &self.errors
    }

    /// Validate and aggregate all shown values into one payload.
    ///
    /// On failure the per-field errors are returned and kept for display.
    pub fn submit(&mut self) -> Result<Value, ValidationErrors> {
        self.submitted = true;
        if !self.validate().is_empty() {
            tracing::debug!(
                form = %self.schema.title,
                errors = self.errors.len(),
                "submit rejected by validation"
            );
            return Err(self.errors.clone());
        }
        let payload = self.payload();
        if self.schema.reset_on_submit {
            self.reset();
        }
        Ok(payload)
    }

    /// Aggregate shown, non-empty values.
    ///
    /// Dotted names nest into objects and groups become arrays of row
    /// objects.
    pub fn payload(&self) -> Value {
        let mut out = Map::new();
        for spec in self.schema.fields() {
            if !self.target_shown(&Target::Field(spec.name.clone())) {
                continue;
            }
            if let Some(json) = self.values.get(&spec.name).and_then(|v| to_json(spec.variant(), v)) {
                insert_nested(&mut out, &spec.name, json);
            }
        }
        for group in self.schema.groups() {
            let rows = self.rows.get(&group.name).map_or(&[][..], Vec::as_slice);
            let items = rows
                .iter()
                .map(|row| {
                    let mut obj = Map::new();
                    if let Some(serial) = &group.serial_field {
                        if let Some(FieldValue::Number(n)) = row.get(serial) {
                            obj.insert(serial.clone(), Value::from(*n));
                        }
                    }
                    for spec in &group.fields {
                        if !row_field_shown(spec, row) {
                            continue;
                        }
                        if let Some(json) = row.get(&spec.name).and_then(|v| to_json(spec.variant(), v)) {
                            insert_nested(&mut obj, &spec.name, json);
                        }
                    }
                    Value::Object(obj)
                })
                .collect();
            insert_nested(&mut out, &group.name, Value::Array(items));
        }
        Value::Object(out)
    }

    fn resolve(&self, path: &str) -> OpsResult<Target> {
        if self.schema.field(path).is_some() {
            return Ok(Target::Field(path.to_string()));
        }
        let mut parts = path.splitn(3, '.');
        let (Some(group), Some(index), Some(field)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(OpsError::UnknownField(path.to_string()));
        };
        let Ok(index) = index.parse::<usize>() else {
            return Err(OpsError::UnknownField(path.to_string()));
        };
        let spec = self
            .schema
            .group(group)
            .ok_or_else(|| OpsError::UnknownGroup(group.to_string()))?;
        let len = self.row_count(group);
        if index >= len {
            return Err(OpsError::RowOutOfRange {
                group: group.to_string(),
                index,
                len,
            });
        }
        if spec.spec(field).is_none() {
            return Err(OpsError::UnknownField(path.to_string()));
        }
        Ok(Target::Row {
            group: group.to_string(),
            index,
            field: field.to_string(),
        })
    }

    fn target_shown(&self, target: &Target) -> bool {
        match target {
            Target::Field(name) => match self.schema.field(name).and_then(|s| s.shown_when.as_ref()) {
                Some((sibling, expected)) => self
                    .values
                    .get(sibling)
                    .is_some_and(|v| v.display() == *expected),
                None => true,
            },
            Target::Row {
                group,
                index,
                field,
            } => {
                let (Some(spec), Some(row)) = (
                    self.schema.group(group).and_then(|g| g.spec(field)),
                    self.rows.get(group).and_then(|r| r.get(*index)),
                ) else {
                    return false;
                };
                row_field_shown(spec, row)
            }
        }
    }

    fn spec_for(&self, target: &Target) -> Option<&FieldSpec> {
        match target {
            Target::Field(name) => self.schema.field(name),
            Target::Row { group, field, .. } => self.schema.group(group)?.spec(field),
        }
    }

    fn revalidate(&mut self, path: &str, target: &Target) {
        let outcome = if self.target_shown(target) {
            let value = self.value(path).cloned().unwrap_or_default();
            self.spec_for(target).and_then(|spec| check(spec, &value))
        } else {
            None
        };
        self.errors.set(path, outcome);
    }

    fn drop_hidden_errors(&mut self) {
        let hidden: Vec<String> = self
            .errors
            .paths()
            .filter(|p| !self.is_shown(p))
            .map(str::to_string)
            .collect();
        for path in hidden {
            self.errors.set(path, None);
        }
    }
}

fn check(spec: &FieldSpec, value: &FieldValue) -> Option<String> {
    validate_field(&spec.descriptor, &spec.rules, value)
}

fn default_row(group: &RepeatGroup, index: usize) -> Row {
    let mut row: Row = group
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.default.clone()))
        .collect();
    if let Some(serial) = &group.serial_field {
        row.insert(serial.clone(), FieldValue::Number((index + 1) as f64));
    }
    row
}

fn row_field_shown(spec: &FieldSpec, row: &Row) -> bool {
    match &spec.shown_when {
        Some((sibling, expected)) => row.get(sibling).is_some_and(|v| v.display() == *expected),
        None => true,
    }
}

fn to_json(variant: &FieldVariant, value: &FieldValue) -> Option<Value> {
    if value.is_empty() {
        return None;
    }
    let json = match FieldValue::parse_for(variant, value.display()) {
        FieldValue::Number(n) => Value::from(n),
        other => Value::String(other.display()),
    };
    Some(json)
}

fn insert_nested(map: &mut Map<String, Value>, name: &str, value: Value) {
    match name.split_once('.') {
        None => {
            map.insert(name.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(inner) = entry {
                insert_nested(inner, rest, value);
            }
        }
    }
}
