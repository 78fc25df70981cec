//! Schema Form
//!
//! Renders any catalog form: sections of DynamicInputs bound to a
//! `FormModel`, repeat groups as row cards, and the submit button.

use std::collections::HashMap;

use dioxus::prelude::*;
use serde_json::Value;
use solarops_core::{FieldChange, FieldSpec, FormKind, FormModel, Glyph, RepeatGroup, SectionBody};
use solarops_ui::{Button, ButtonVariant, DynamicInput, DynamicInputHandle, Icon, IconButton};

use crate::context::{show_toast, use_toast};

/// Toast shown after a successful submit
pub const SUBMITTED_MESSAGE: &str = "Form Data Submitted Successfully";

#[derive(Props, Clone, PartialEq)]
pub struct SchemaFormProps {
    /// Which catalog form to render
    pub kind: FormKind,
    /// Receives the payload of every valid submit
    pub on_submit: EventHandler<Value>,
}

/// Mounted field handles by path
type Handles = Signal<HashMap<String, DynamicInputHandle>>;

/// Generic form view over a catalog schema
///
/// The model lives in a signal owned by this component; remount it
/// (for example with a `key`) to switch forms. A rejected submit moves
/// focus to the first invalid field.
#[component]
pub fn SchemaForm(props: SchemaFormProps) -> Element {
    let kind = props.kind;
    let on_submit = props.on_submit;
    let toast = use_toast();
    let mut form = use_signal(move || load(kind));
    let handles: Handles = use_signal(HashMap::new);

    let Some(model) = form.read().clone() else {
        return rsx! {
            div { class: "form-unavailable", "This form is unavailable." }
        };
    };
    let schema = model.schema();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let (outcome, first_invalid) = match form.write().as_mut() {
            Some(model) => {
                let outcome = model.submit();
                (outcome, model.first_error_path())
            }
            None => return,
        };
        match outcome {
            Ok(payload) => {
                tracing::info!(form = %kind, %payload, "form submitted");
                on_submit.call(payload);
                show_toast(toast, SUBMITTED_MESSAGE);
            }
            Err(errors) => {
                tracing::debug!(form = %kind, count = errors.len(), "form has validation errors");
                let handle = first_invalid.and_then(|path| handles.peek().get(&path).copied());
                if let Some(handle) = handle {
                    handle.focus();
                }
            }
        }
    };

    rsx! {
        form { class: "schema-form", onsubmit: submit,
            h2 { class: "form-title", "{schema.title}" }

            for section in schema.sections.iter() {
                section { class: "form-section",
                    h3 { class: "section-title", "{section.title}" }
                    {section_view(form, handles, &model, &section.body)}
                }
            }

            div { class: "form-actions",
                Button { button_type: "submit".to_string(), "{schema.submit_label}" }
            }
        }
    }
}

fn load(kind: FormKind) -> Option<FormModel> {
    match FormModel::new(kind.schema()) {
        Ok(model) => Some(model),
        Err(e) => {
            tracing::error!(form = %kind, error = %e, "invalid form schema");
            None
        }
    }
}

fn apply_change(mut form: Signal<Option<FormModel>>, path: &str, raw: String) {
    if let Some(model) = form.write().as_mut() {
        if let Err(e) = model.set_value(path, raw) {
            tracing::warn!(path, error = %e, "change for unknown field");
        }
    }
}

fn section_view(
    form: Signal<Option<FormModel>>,
    handles: Handles,
    model: &FormModel,
    body: &SectionBody,
) -> Element {
    match body {
        SectionBody::Fields(fields) => rsx! {
            div { class: "form-grid",
                for spec in fields.iter() {
                    {field_view(form, handles, model, spec, spec.name.clone())}
                }
            }
        },
        SectionBody::Group(group) => group_view(form, handles, model, group),
    }
}

fn field_view(
    form: Signal<Option<FormModel>>,
    mut handles: Handles,
    model: &FormModel,
    spec: &FieldSpec,
    path: String,
) -> Element {
    if !model.is_shown(&path) {
        return rsx! {};
    }
    let value = model.value(&path).cloned();
    let error = model.error(&path).map(str::to_string);
    let key = path.clone();
    let handle_path = path.clone();

    rsx! {
        DynamicInput {
            key: "{key}",
            label: spec.label().to_string(),
            variant: spec.variant().clone(),
            value,
            error,
            icon: spec.descriptor.icon,
            placeholder: spec.descriptor.placeholder.clone(),
            name: path.clone(),
            onchange: move |change: FieldChange| apply_change(form, &path, change.value),
            on_handle: move |handle: DynamicInputHandle| {
                handles.write().insert(handle_path.clone(), handle);
            },
        }
    }
}

fn group_view(
    form: Signal<Option<FormModel>>,
    handles: Handles,
    model: &FormModel,
    group: &RepeatGroup,
) -> Element {
    let rows = model.row_count(&group.name);
    let name = group.name.clone();

    rsx! {
        div { class: "row-group",
            for index in 0..rows {
                {row_view(form, handles, model, group, index)}
            }
            Button {
                variant: ButtonVariant::Secondary,
                class: "row-add".to_string(),
                onclick: move |_| {
                    let mut form = form;
                    if let Some(model) = form.write().as_mut() {
                        if let Err(e) = model.append_row(&name) {
                            tracing::warn!(error = %e, "could not append row");
                        }
                    };
                },
                Icon { glyph: Glyph::Plus }
                " Add {group.item_label}"
            }
        }
    }
}

fn row_view(
    form: Signal<Option<FormModel>>,
    handles: Handles,
    model: &FormModel,
    group: &RepeatGroup,
    index: usize,
) -> Element {
    let number = index + 1;
    let name = group.name.clone();

    rsx! {
        div { key: "{group.name}-{index}", class: "row-card",
            div { class: "row-card-header",
                span { class: "row-card-title", "{group.item_label} {number}" }
                IconButton {
                    aria_label: format!("Remove {} {}", group.item_label, number),
                    class: "row-remove".to_string(),
                    onclick: move |_| {
                        let mut form = form;
                        if let Some(model) = form.write().as_mut() {
                            if let Err(e) = model.remove_row(&name, index) {
                                tracing::warn!(error = %e, "could not remove row");
                            }
                        };
                    },
                    Icon { glyph: Glyph::Trash }
                }
            }
            div { class: "form-grid",
                for spec in group.fields.iter() {
                    {field_view(form, handles, model, spec, format!("{}.{}.{}", group.name, index, spec.name))}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Toast;
    use dioxus::dioxus_core::VirtualDom;

    fn render(kind: FormKind) -> String {
        let mut dom = VirtualDom::new_with_props(
            |kind: FormKind| {
                use_context_provider(|| Signal::new(None::<Toast>));
                rsx! {
                    SchemaForm { kind, on_submit: move |_: Value| {} }
                }
            },
            kind,
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_sections_and_first_row() {
        let html = render(FormKind::Sales);
        assert!(html.contains("Project Details"), "{html}");
        assert!(html.contains("Customer Personal Details"));
        assert!(html.contains(r#"name="customerName""#));
        assert!(html.contains(r#"name="paymentDetails.0.paymentType""#));
        assert!(html.contains("Add Payment"));
    }

    #[test]
    fn hidden_fields_are_not_rendered() {
        let html = render(FormKind::Sales);
        assert!(!html.contains(r#"name="paymentDetails.0.chequeNo""#), "{html}");
    }

    #[test]
    fn renamed_reports_render_their_titles() {
        assert!(render(FormKind::ServiceEngineer).contains("Service Engineer Report"));
        assert!(render(FormKind::Godown).contains("Godown Material Details"));
    }
}
