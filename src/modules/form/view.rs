use serde::Serialize;
use serde_json::Value;

use crate::modules::gateway::application::ports::outgoing::{Record, RecordId};
use crate::modules::schema::{Collection, FieldDescriptor, FieldKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// A rendered input, with its element identifiers fixed at build time.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWidget {
    Input {
        id: String,
        input_type: &'static str,
        value: String,
    },
    TextArea {
        id: String,
        value: String,
    },
    /// File picker plus a hidden holder for the already-uploaded URL and a
    /// preview line.
    File {
        picker_id: String,
        holder_id: String,
        preview_id: String,
        url: String,
        preview: String,
    },
}

impl FieldWidget {
    fn blank(descriptor: &FieldDescriptor) -> Self {
        let id = value_id(descriptor.name);
        match descriptor.kind {
            FieldKind::Text => FieldWidget::Input {
                id,
                input_type: "text",
                value: String::new(),
            },
            FieldKind::Number => FieldWidget::Input {
                id,
                input_type: "number",
                value: String::new(),
            },
            FieldKind::TextArea => FieldWidget::TextArea {
                id,
                value: String::new(),
            },
            FieldKind::FileUpload => FieldWidget::File {
                picker_id: file_id(descriptor.name),
                holder_id: id,
                preview_id: format!("preview-{}", descriptor.name),
                url: String::new(),
                preview: String::new(),
            },
        }
    }

    fn set(&mut self, text: String) {
        match self {
            FieldWidget::Input { value, .. } | FieldWidget::TextArea { value, .. } => *value = text,
            FieldWidget::File { url, preview, .. } => {
                *preview = if text.is_empty() {
                    String::new()
                } else {
                    format!("Current: {text}")
                };
                *url = text;
            }
        }
    }

    /// Identifier of the element holding the textual value.
    pub fn value_id(&self) -> &str {
        match self {
            FieldWidget::Input { id, .. } | FieldWidget::TextArea { id, .. } => id,
            FieldWidget::File { holder_id, .. } => holder_id,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            FieldWidget::Input { value, .. } | FieldWidget::TextArea { value, .. } => value,
            FieldWidget::File { url, .. } => url,
        }
    }
}

pub fn value_id(name: &str) -> String {
    format!("field-{name}")
}

pub fn file_id(name: &str) -> String {
    format!("field-file-{name}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub descriptor: &'static FieldDescriptor,
    pub widget: FieldWidget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub collection: Collection,
    pub mode: FormMode,
    pub fields: Vec<FieldView>,
}

#[derive(Serialize)]
struct FieldContext<'a> {
    label: &'static str,
    name: &'static str,
    id: &'a str,
    value: &'a str,
    input_type: &'static str,
    /// `any` on number inputs so stored fractions pass browser validation.
    step: Option<&'static str>,
    is_textarea: bool,
    is_file: bool,
    picker_id: Option<&'a str>,
    preview_id: Option<&'a str>,
    preview: Option<&'a str>,
}

impl FormView {
    /// One blank widget per schema field, in schema order.
    pub fn build(collection: Collection, mode: FormMode) -> Self {
        let fields = collection
            .schema()
            .iter()
            .map(|descriptor| FieldView {
                descriptor,
                widget: FieldWidget::blank(descriptor),
            })
            .collect();

        Self {
            collection,
            mode,
            fields,
        }
    }

    /// Copies `record[name]` into every widget. Missing or null attributes
    /// leave the widget empty.
    pub fn populate(&mut self, record: &Record) {
        for field in &mut self.fields {
            let text = record
                .get(field.descriptor.name)
                .map(display_value)
                .unwrap_or_default();
            field.widget.set(text);
        }
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Add {}", self.collection.singular()),
            FormMode::Edit(_) => format!("Edit {}", self.collection.singular()),
        }
    }

    /// Submit target of the form.
    pub fn action(&self) -> String {
        match &self.mode {
            FormMode::Create => format!("/admin/{}", self.collection.table()),
            FormMode::Edit(id) => format!("/admin/{}/{}", self.collection.table(), id),
        }
    }

    /// What the browser would post back if nothing were touched.
    #[cfg(test)]
    pub fn current_state(&self) -> super::extract::FormState {
        let mut state = super::extract::FormState::default();
        for field in &self.fields {
            state.set_value(field.widget.value_id(), field.widget.value());
        }
        state
    }

    pub fn context(&self) -> Value {
        let fields: Vec<FieldContext<'_>> = self
            .fields
            .iter()
            .map(|f| {
                let (input_type, is_textarea, is_file) = match &f.widget {
                    FieldWidget::Input { input_type, .. } => (*input_type, false, false),
                    FieldWidget::TextArea { .. } => ("text", true, false),
                    FieldWidget::File { .. } => ("file", false, true),
                };
                let (picker_id, preview_id, preview) = match &f.widget {
                    FieldWidget::File {
                        picker_id,
                        preview_id,
                        preview,
                        ..
                    } => (
                        Some(picker_id.as_str()),
                        Some(preview_id.as_str()),
                        Some(preview.as_str()),
                    ),
                    _ => (None, None, None),
                };
                FieldContext {
                    label: f.descriptor.label,
                    name: f.descriptor.name,
                    id: f.widget.value_id(),
                    value: f.widget.value(),
                    input_type,
                    step: (input_type == "number").then_some("any"),
                    is_textarea,
                    is_file,
                    picker_id,
                    preview_id,
                    preview,
                }
            })
            .collect();

        serde_json::json!({
            "title": self.title(),
            "action": self.action(),
            "collection": self.collection.table(),
            "fields": fields,
        })
    }
}

/// Text shown in an input for a stored attribute value.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
