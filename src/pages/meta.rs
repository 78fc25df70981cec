//! Meta page - add meta entries and list the ones saved this session.

use dioxus::prelude::*;
use serde_json::Value;
use solarops_core::FormKind;

use crate::components::SchemaForm;

/// One saved meta entry, as shown on its card
#[derive(Clone, Debug, PartialEq)]
struct MetaEntry {
    kind: String,
    value: String,
    description: String,
    status: String,
}

impl MetaEntry {
    fn from_payload(payload: &Value) -> Self {
        let text = |key: &str| {
            payload
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            kind: text("type"),
            value: text("value"),
            description: text("description"),
            status: text("status"),
        }
    }

    fn status_class(&self) -> &'static str {
        match self.status.to_ascii_lowercase().as_str() {
            "active" => "status-pill active",
            "inactive" => "status-pill inactive",
            "pending" => "status-pill pending",
            _ => "status-pill",
        }
    }
}

#[component]
pub fn Meta() -> Element {
    let mut entries: Signal<Vec<MetaEntry>> = use_signal(Vec::new);

    rsx! {
        div { class: "single-form",
            SchemaForm {
                kind: FormKind::Meta,
                on_submit: move |payload: Value| {
                    entries.write().push(MetaEntry::from_payload(&payload));
                },
            }

            if !entries.read().is_empty() {
                section { class: "meta-list",
                    for entry in entries.read().iter() {
                        div { class: "meta-card",
                            div { class: "meta-card-header",
                                h3 { "{entry.value}" }
                                span { class: "{entry.status_class()}", "{entry.status}" }
                            }
                            p { class: "meta-card-type", "{entry.kind}" }
                            p { class: "meta-card-description", "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_reads_payload_fields() {
        let entry = MetaEntry::from_payload(&json!({
            "type": "meta",
            "value": "SEO Description",
            "description": "Main website SEO description",
            "status": "Active",
        }));
        assert_eq!(entry.value, "SEO Description");
        assert_eq!(entry.status_class(), "status-pill active");
    }

    #[test]
    fn missing_fields_are_blank() {
        let entry = MetaEntry::from_payload(&json!({ "value": "Keywords" }));
        assert_eq!(entry.kind, "");
        assert_eq!(entry.status_class(), "status-pill");
    }
}
