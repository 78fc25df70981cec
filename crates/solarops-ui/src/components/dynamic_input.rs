//! Dynamic Input
//!
//! One labelled control for every dashboard field. The variant picks the
//! native control; label, leading icon, border and error line are shared.
//!
//! Features:
//! - Floating label when focused, filled, or for date/select
//! - Blue focus border, red error border and message
//! - Leading glyph icon, chevron for selects, calendar glyph on narrow screens
//! - One-way sync from the parent's value

use std::rc::Rc;

use dioxus::prelude::*;
use solarops_core::{
    BorderTone, FieldChange, FieldDescriptor, FieldState, FieldValue, FieldVariant, Glyph,
    LabelPosition,
};

use super::icons::Icon;

/// Properties for the DynamicInput component
#[derive(Clone, PartialEq, Props)]
pub struct DynamicInputProps {
    /// Label text, resting inside the control or floating above it
    pub label: String,
    /// Which native control to render
    #[props(default)]
    pub variant: FieldVariant,
    /// Authoritative value owned by the parent form
    #[props(default)]
    pub value: Option<FieldValue>,
    /// Called once per keystroke or selection change
    #[props(default)]
    pub onchange: Option<EventHandler<FieldChange>>,
    /// Externally computed validation message
    #[props(default)]
    pub error: Option<String>,
    /// Leading glyph
    #[props(default)]
    pub icon: Option<Glyph>,
    /// Native placeholder
    #[props(default)]
    pub placeholder: Option<String>,
    /// Native name, also carried on change events
    #[props(default)]
    pub name: Option<String>,
    /// Native id; defaults to one derived from the name
    #[props(default)]
    pub id: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Receives the imperative handle once the control is mounted
    #[props(default)]
    pub on_handle: Option<EventHandler<DynamicInputHandle>>,
}

/// Imperative access to a mounted DynamicInput
///
/// Handed out through `on_handle`. It never exposes the underlying element.
#[derive(Clone, Copy, PartialEq)]
pub struct DynamicInputHandle {
    state: Signal<FieldState>,
    element: Signal<Option<Rc<MountedData>>>,
}

impl DynamicInputHandle {
    /// Move keyboard focus into the control
    pub fn focus(&self) {
        self.set_focus(true);
    }

    /// Remove keyboard focus from the control
    pub fn blur(&self) {
        self.set_focus(false);
    }

    /// Currently displayed value
    pub fn value(&self) -> String {
        self.state.peek().display().to_string()
    }

    pub fn is_focused(&self) -> bool {
        self.state.peek().is_focused()
    }

    fn set_focus(&self, focused: bool) {
        let Some(element) = self.element.peek().clone() else {
            tracing::warn!("focus requested before the field was mounted");
            return;
        };
        spawn(async move {
            if let Err(e) = element.set_focus(focused).await {
                tracing::warn!(error = ?e, focused, "failed to change field focus");
            }
        });
    }
}

/// CSS classes for each part of the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClasses {
    pub wrapper: String,
    pub label: String,
    pub frame: String,
    pub control: String,
}

/// Compute the classes for a field from its state
pub fn field_classes(state: &FieldState, variant: &FieldVariant, has_icon: bool) -> FieldClasses {
    let has_error = state.error().is_some();

    let mut wrapper = String::from("dyn-field");
    if has_error {
        wrapper.push_str(" has-error");
    }

    let mut label = String::from(match state.label_position(variant) {
        LabelPosition::Floating => "dyn-label floating",
        LabelPosition::Resting => "dyn-label resting",
    });
    if has_icon {
        label.push_str(" with-icon");
    }
    if has_error {
        label.push_str(" error");
    }

    let frame = match state.border_tone() {
        BorderTone::Neutral => "dyn-frame neutral",
        BorderTone::Focused => "dyn-frame focused",
        BorderTone::Error => "dyn-frame error",
    }
    .to_string();

    let mut control = String::from("dyn-control");
    if has_icon {
        control.push_str(" with-icon");
    }
    if variant.always_floats() {
        control.push_str(" native-picker");
    }

    FieldClasses {
        wrapper,
        label,
        frame,
        control,
    }
}

fn control_id(id: Option<&str>, name: Option<&str>, label: &str) -> String {
    match (id, name) {
        (Some(id), _) => id.to_string(),
        (None, Some(name)) => format!("field-{}", name.replace('.', "-")),
        (None, None) => format!("field-{}", label.to_lowercase().replace(' ', "-")),
    }
}

/// Polymorphic form field
///
/// The parent owns `value` and `error`; this component owns only its
/// focus flag and a display copy of the value. Every edit is reported
/// through `onchange` and nothing is validated here.
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     DynamicInput {
///         label: "Email".to_string(),
///         variant: FieldVariant::Text(InputKind::Email),
///         name: "email".to_string(),
///         icon: Glyph::Mail,
///         value: FieldValue::from_raw(email()),
///         onchange: move |change: FieldChange| email.set(change.value),
///     }
/// }
/// ```
#[component]
pub fn DynamicInput(props: DynamicInputProps) -> Element {
    let mut state = use_signal(|| FieldState::new(props.value.clone()).with_name(props.name.clone()));
    let mut element = use_signal(|| None::<Rc<MountedData>>);

    let external = props.value.clone();
    use_effect(use_reactive((&external,), move |(external,)| {
        if state.write().sync_external(external) {
            tracing::trace!("field display replaced by parent value");
        }
    }));

    // Error is display-only; apply it to a snapshot instead of the signal
    let mut view = state.read().clone();
    view.set_error(props.error.clone());
    let classes = field_classes(&view, &props.variant, props.icon.is_some());
    let display = view.display().to_string();

    let id = control_id(props.id.as_deref(), props.name.as_deref(), &props.label);
    let name = props.name.clone().unwrap_or_default();
    let placeholder = props.placeholder.clone().unwrap_or_default();
    let autocomplete = props.autocomplete.clone().unwrap_or_else(|| "off".to_string());
    let onchange = props.onchange;
    let on_handle = props.on_handle;

    let mut emit = move |raw: String| {
        let change = state.write().input(raw);
        tracing::trace!(name = ?change.name, "field changed");
        if let Some(handler) = &onchange {
            handler.call(change);
        }
    };

    let mounted = move |e: MountedEvent| {
        element.set(Some(e.data()));
        if let Some(handler) = &on_handle {
            handler.call(DynamicInputHandle { state, element });
        }
    };

    let control = match &props.variant {
        FieldVariant::Select(_) => {
            let choices = FieldDescriptor::new(props.label.clone(), props.variant.clone()).choices();
            rsx! {
                select {
                    id: "{id}",
                    name: "{name}",
                    class: "{classes.control}",
                    value: "{display}",
                    required: props.required,
                    disabled: props.disabled,
                    onfocus: move |_| state.write().focus(),
                    onblur: move |_| state.write().blur(),
                    onchange: move |e: FormEvent| emit(e.value()),
                    onmounted: mounted,
                    for choice in choices {
                        option {
                            key: "{choice.value}",
                            value: "{choice.value}",
                            selected: choice.value == display,
                            "{choice.title}"
                        }
                    }
                }
                Icon { glyph: Glyph::ChevronDown, class: "dyn-chevron".to_string() }
            }
        }
        FieldVariant::Date => rsx! {
            input {
                id: "{id}",
                name: "{name}",
                r#type: "date",
                class: "{classes.control}",
                value: "{display}",
                placeholder: "{placeholder}",
                required: props.required,
                disabled: props.disabled,
                autocomplete: "{autocomplete}",
                onfocus: move |_| state.write().focus(),
                onblur: move |_| state.write().blur(),
                oninput: move |e: FormEvent| emit(e.value()),
                onmounted: mounted,
            }
            Icon { glyph: Glyph::Calendar, class: "dyn-calendar".to_string() }
        },
        FieldVariant::Text(kind) => {
            let native_type = kind.as_str().to_string();
            rsx! {
                input {
                    id: "{id}",
                    name: "{name}",
                    r#type: "{native_type}",
                    class: "{classes.control}",
                    value: "{display}",
                    placeholder: "{placeholder}",
                    required: props.required,
                    disabled: props.disabled,
                    autocomplete: "{autocomplete}",
                    onfocus: move |_| state.write().focus(),
                    onblur: move |_| state.write().blur(),
                    oninput: move |e: FormEvent| emit(e.value()),
                    onmounted: mounted,
                }
            }
        }
    };

    rsx! {
        div { class: "{classes.wrapper}",
            div { class: "{classes.frame}",
                if let Some(glyph) = props.icon {
                    Icon { glyph, class: "dyn-icon".to_string() }
                }
                {control}
                label { class: "{classes.label}", r#for: "{id}", "{props.label}" }
            }
            if let Some(message) = view.error() {
                div { class: "dyn-error", "role": "alert",
                    Icon { glyph: Glyph::AlertCircle }
                    span { "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use solarops_core::{options, InputKind};

    fn select() -> FieldVariant {
        FieldVariant::Select(options(&[("low", "Low"), ("high", "High")]))
    }

    #[test]
    fn empty_text_field_rests() {
        let state = FieldState::new(None);
        let classes = field_classes(&state, &FieldVariant::default(), false);
        assert_eq!(classes.wrapper, "dyn-field");
        assert_eq!(classes.label, "dyn-label resting");
        assert_eq!(classes.frame, "dyn-frame neutral");
        assert_eq!(classes.control, "dyn-control");
    }

    #[test]
    fn focus_floats_label_and_tints_border() {
        let mut state = FieldState::new(None);
        state.focus();
        let classes = field_classes(&state, &FieldVariant::Text(InputKind::Email), true);
        assert_eq!(classes.label, "dyn-label floating with-icon");
        assert_eq!(classes.frame, "dyn-frame focused");
        assert_eq!(classes.control, "dyn-control with-icon");
    }

    #[test]
    fn filled_field_keeps_label_floating_after_blur() {
        let mut state = FieldState::new(None);
        state.focus();
        state.input("A");
        state.blur();
        let classes = field_classes(&state, &FieldVariant::default(), false);
        assert_eq!(classes.label, "dyn-label floating");
        assert_eq!(classes.frame, "dyn-frame neutral");
    }

    #[test]
    fn pickers_always_float() {
        let state = FieldState::new(None);
        for variant in [FieldVariant::Date, select()] {
            let classes = field_classes(&state, &variant, false);
            assert_eq!(classes.label, "dyn-label floating");
            assert_eq!(classes.control, "dyn-control native-picker");
        }
    }

    #[test]
    fn error_wins_over_focus() {
        let mut state = FieldState::new(None);
        state.focus();
        state.set_error(Some("Email is required".to_string()));
        let classes = field_classes(&state, &FieldVariant::default(), false);
        assert_eq!(classes.wrapper, "dyn-field has-error");
        assert_eq!(classes.frame, "dyn-frame error");
        assert!(classes.label.ends_with(" error"));

        state.set_error(None);
        let classes = field_classes(&state, &FieldVariant::default(), false);
        assert_eq!(classes.frame, "dyn-frame focused");
    }

    fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
        let mut dom = VirtualDom::new_with_props(root, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn priority(value: Option<FieldValue>) -> Element {
        rsx! {
            DynamicInput {
                label: "Priority".to_string(),
                variant: select(),
                name: "priority".to_string(),
                value,
            }
        }
    }

    fn email(error: Option<String>) -> Element {
        rsx! {
            DynamicInput {
                label: "Email".to_string(),
                variant: FieldVariant::Text(InputKind::Email),
                name: "email".to_string(),
                value: FieldValue::from("asha@"),
                error,
            }
        }
    }

    #[test]
    fn select_lists_placeholder_before_options() {
        let html = render(priority, Some(FieldValue::from("high")));
        let placeholder = html.find("Select Priority").unwrap();
        let low = html.find("Low").unwrap();
        let high = html.find("High").unwrap();
        assert!(placeholder < low && low < high, "{html}");
        assert!(html.contains("dyn-chevron"));
        assert!(html.contains("dyn-label floating"));
    }

    #[test]
    fn error_line_follows_error_prop() {
        let html = render(email, Some("Please enter a valid email".to_string()));
        assert!(html.contains("dyn-error"), "{html}");
        assert!(html.contains("Please enter a valid email"));
        assert!(html.contains("dyn-frame error"));

        let html = render(email, None);
        assert!(!html.contains("dyn-error"), "{html}");
        assert!(html.contains("dyn-frame neutral"));
    }

    #[test]
    fn text_field_renders_parent_value() {
        let html = render(email, None);
        assert!(html.contains(r#"value="asha@""#), "{html}");
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"id="field-email""#));
    }

    #[test]
    fn control_id_prefers_explicit_id() {
        assert_eq!(control_id(Some("pw"), Some("password"), "Password"), "pw");
        assert_eq!(
            control_id(None, Some("wireDetails.acWire"), "AC Wire"),
            "field-wireDetails-acWire"
        );
        assert_eq!(control_id(None, None, "Booking Date"), "field-booking-date");
    }
}
