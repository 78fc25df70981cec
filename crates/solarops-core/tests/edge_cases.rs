//! Scenario and edge case tests
//!
//! These walk the field state machine and the form model through the
//! behaviours a form screen relies on.

use solarops_core::{
    options, BorderTone, FieldDescriptor, FieldPhase, FieldState, FieldValue, FieldVariant,
    FormKind, FormModel, InputKind, LabelPosition, OpsError,
};

// ============================================================================
// Field Scenarios
// ============================================================================

/// Select with two options renders the sentinel first and emits raw values
#[test]
fn test_select_scenario() {
    let descriptor = FieldDescriptor::select(
        "label",
        options(&[("A", "Alpha"), ("B", "Beta")]),
    );
    let mut state = FieldState::new(Some(FieldValue::Empty));

    let titles: Vec<String> = descriptor.choices().into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["Select label", "Alpha", "Beta"]);

    let change = state.input("B");
    assert_eq!(change.value, "B");
    assert_eq!(state.display(), "B");
}

/// Date label floats on mount with no value and no focus
#[test]
fn test_date_floats_immediately() {
    let state = FieldState::new(Some(FieldValue::Empty));
    assert_eq!(state.phase(), FieldPhase::UnfocusedEmpty);
    assert_eq!(
        state.label_position(&FieldVariant::Date),
        LabelPosition::Floating
    );
}

/// Error appears and disappears without remounting
#[test]
fn test_error_set_and_cleared_in_place() {
    let mut state = FieldState::new(None);
    state.set_error(Some("Email is required".to_string()));
    assert_eq!(state.error(), Some("Email is required"));
    assert_eq!(state.border_tone(), BorderTone::Error);

    state.set_error(None);
    assert_eq!(state.error(), None);
    assert_eq!(state.border_tone(), BorderTone::Neutral);
}

/// Last external write wins even mid-typing
#[test]
fn test_external_update_preempts_keystroke() {
    let mut state = FieldState::new(Some(FieldValue::from("10")));
    state.focus();
    state.input("105");
    state.sync_external(Some(FieldValue::from("200")));
    assert_eq!(state.display(), "200");
}

/// Clearing the external value empties the display
#[test]
fn test_external_clear() {
    let mut state = FieldState::new(Some(FieldValue::from("Pune")));
    assert_eq!(state.phase(), FieldPhase::UnfocusedFilled);
    state.sync_external(None);
    assert_eq!(state.display(), "");
    assert_eq!(state.phase(), FieldPhase::UnfocusedEmpty);
}

/// Unknown native types pass through and behave like text
#[test]
fn test_other_input_kind_uses_text_rules() {
    let variant = FieldVariant::from_type(Some("url"), vec![]);
    assert_eq!(variant, FieldVariant::Text(InputKind::Other("url".to_string())));
    let state = FieldState::new(None);
    assert_eq!(state.label_position(&variant), LabelPosition::Resting);
}

// ============================================================================
// Form Scenarios
// ============================================================================

/// Login: required, then format, then min length
#[test]
fn test_login_validation_messages() {
    let mut form = FormModel::new(FormKind::Login.schema()).unwrap();

    let errors = form.submit().unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));

    form.set_value("email", "ops@").unwrap();
    form.set_value("password", "123").unwrap();
    assert_eq!(form.error("email"), Some("Please enter a valid email"));
    assert_eq!(
        form.error("password"),
        Some("Password must be at least 6 characters")
    );

    form.set_value("email", "ops@sunfield.in").unwrap();
    form.set_value("password", "123456").unwrap();
    let payload = form.submit().unwrap();
    assert_eq!(payload["email"], "ops@sunfield.in");
}

/// Meta form starts with type=meta and only reports failing fields
#[test]
fn test_meta_defaults_and_partial_errors() {
    let mut form = FormModel::new(FormKind::Meta.schema()).unwrap();
    assert_eq!(form.value("type"), Some(&FieldValue::from("meta")));

    form.set_value("value", "Net meter").unwrap();
    let errors = form.submit().unwrap_err();
    assert!(!errors.contains("type"));
    assert!(!errors.contains("value"));
    assert_eq!(errors.get("description"), Some("Description is required"));
    assert_eq!(errors.get("status"), Some("Status is required"));
    assert_eq!(errors.len(), 2);
}

/// Sales resets after a successful submit
#[test]
fn test_sales_resets_on_submit() {
    let mut form = FormModel::new(FormKind::Sales.schema()).unwrap();
    form.set_value("customerName", "Asha Patil").unwrap();
    form.set_value("appliedKW", "3").unwrap();
    form.append_row("paymentDetails").unwrap();

    let payload = form.submit().unwrap();
    assert_eq!(payload["customerName"], "Asha Patil");
    assert_eq!(payload["appliedKW"], 3.0);
    assert_eq!(payload["needVisit"], "No");
    assert_eq!(payload["paymentDetails"].as_array().unwrap().len(), 2);
    assert_eq!(payload["paymentDetails"][1]["sno"], 2.0);

    assert_eq!(form.value("customerName"), Some(&FieldValue::Empty));
    assert_eq!(form.row_count("paymentDetails"), 1);
    assert!(!form.has_submitted());
}

/// A cheque payment may be saved before the cheque number is known
#[test]
fn test_sales_cheque_number_optional() {
    let mut form = FormModel::new(FormKind::Sales.schema()).unwrap();
    form.set_value("paymentDetails.0.paymentType", "cheque").unwrap();
    assert!(form.is_shown("paymentDetails.0.chequeNo"));

    let payload = form.submit().unwrap();
    let row = &payload["paymentDetails"][0];
    assert_eq!(row["paymentType"], "cheque");
    assert!(row.get("chequeNo").is_none());
}

/// Negative kilowatts are rejected with the positive-number message
#[test]
fn test_sales_positive_numbers() {
    let mut form = FormModel::new(FormKind::Sales.schema()).unwrap();
    form.set_value("sanctionedLoad", "-2").unwrap();
    let errors = form.submit().unwrap_err();
    assert_eq!(
        errors.get("sanctionedLoad"),
        Some("Sanctioned Load must be a positive number")
    );
}

/// Partial decimal input is stored verbatim
#[test]
fn test_partial_number_is_kept_as_typed() {
    let mut form = FormModel::new(FormKind::Sales.schema()).unwrap();
    form.set_value("projectCost", "1.").unwrap();
    assert_eq!(form.value("projectCost"), Some(&FieldValue::from("1.")));
}

/// Installation wire details nest under one object
#[test]
fn test_installation_nested_payload() {
    let mut form = FormModel::new(FormKind::Installation.schema()).unwrap();
    form.set_value("wireDetails.acWire", "40").unwrap();
    form.set_value("wireDetails.dcWire", "25.5").unwrap();
    let payload = form.submit().unwrap();
    assert_eq!(payload["wireDetails"]["acWire"], 40.0);
    assert_eq!(payload["wireDetails"]["dcWire"], 25.5);
    assert!(payload["wireDetails"].get("earthingWire").is_none());
}

/// Every panel serial row is required
#[test]
fn test_service_engineer_rows_required() {
    let mut form = FormModel::new(FormKind::ServiceEngineer.schema()).unwrap();
    form.append_row("panelSerialNumbers").unwrap();
    form.set_value("panelSerialNumbers.0.serialNumber", "PNL-001").unwrap();

    let errors = form.submit().unwrap_err();
    assert!(!errors.contains("panelSerialNumbers.0.serialNumber"));
    assert_eq!(
        errors.get("panelSerialNumbers.1.serialNumber"),
        Some("Serial number is required")
    );
}

/// Support rejects values outside the assignee list
#[test]
fn test_support_rejects_unknown_assignee() {
    let mut form = FormModel::new(FormKind::Support.schema()).unwrap();
    form.set_value("title", "Inverter tripping").unwrap();
    form.set_value("description", "Trips every afternoon").unwrap();
    form.set_value("assignedTo", "nobody").unwrap();
    let errors = form.submit().unwrap_err();
    assert_eq!(errors.get("assignedTo"), Some("Select a valid Assigned To"));
    assert!(!errors.contains("priority"));
}

/// Row paths into a group that has been emptied are out of range
#[test]
fn test_godown_empty_group() {
    let mut form = FormModel::new(FormKind::Godown.schema()).unwrap();
    form.remove_row("materials", 0).unwrap();
    assert_eq!(
        form.set_value("materials.0.unit", "kg"),
        Err(OpsError::RowOutOfRange {
            group: "materials".to_string(),
            index: 0,
            len: 0
        })
    );
    let payload = form.submit().unwrap();
    assert_eq!(payload["materials"], serde_json::json!([]));
}

/// Godown clears its rows after a successful submit
#[test]
fn test_godown_resets_on_submit() {
    let mut form = FormModel::new(FormKind::Godown.schema()).unwrap();
    form.set_value("materials.0.materialName", "Panel").unwrap();
    form.set_value("materials.0.quantity", "12").unwrap();
    form.append_row("materials").unwrap();
    form.set_value("materials.1.materialName", "Inverter").unwrap();

    let payload = form.submit().unwrap();
    assert_eq!(payload["materials"][0]["materialName"], "Panel");
    assert_eq!(payload["materials"][0]["quantity"], 12.0);
    assert_eq!(payload["materials"][1]["materialName"], "Inverter");

    assert_eq!(form.row_count("materials"), 1);
    assert_eq!(
        form.value("materials.0.materialName"),
        Some(&FieldValue::Empty)
    );
    assert!(!form.has_submitted());
}
