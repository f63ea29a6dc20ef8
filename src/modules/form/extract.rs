use async_trait::async_trait;
use serde_json::{Number, Value};
use std::collections::HashMap;
use tracing::warn;

use super::view::{FieldWidget, FormView};
use crate::modules::gateway::application::ports::outgoing::{Record, UploadFile};
use crate::modules::schema::{FieldKind, FieldShape};

/// Submitted form contents keyed by element identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: HashMap<String, String>,
    pub files: HashMap<String, UploadFile>,
}

impl FormState {
    pub fn set_value(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn attach_file(&mut self, id: impl Into<String>, file: UploadFile) {
        self.files.insert(id.into(), file);
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }
}

/// Stores a picked file and hands back its public URL.
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, folder: &str, file: UploadFile) -> Result<String, String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub payload: Record,
    /// One entry per failed upload.
    pub warnings: Vec<String>,
}

/// Turns submitted form contents into a record payload.
///
/// Files are uploaded one after another in schema order. A failed upload
/// stores `null` for that field and adds a warning; the rest of the payload
/// is still produced.
pub async fn extract(view: &FormView, mut state: FormState, uploader: &dyn Uploader) -> Extraction {
    let mut payload = Record::new();
    let mut warnings = Vec::new();
    let folder = view.collection.table();

    for field in &view.fields {
        let descriptor = field.descriptor;
        let raw = state.value(field.widget.value_id()).to_string();

        let value = match (&field.widget, descriptor.kind, descriptor.shape) {
            (FieldWidget::File { picker_id, .. }, _, _) => match state.files.remove(picker_id) {
                Some(file) => match uploader.upload(folder, file).await {
                    Ok(url) => Value::String(url),
                    Err(message) => {
                        warn!(
                            collection = %view.collection,
                            field = descriptor.name,
                            error = %message,
                            "Upload failed, storing empty value"
                        );
                        warnings.push(format!("{}: upload failed ({message})", descriptor.label));
                        Value::Null
                    }
                },
                None => Value::String(raw),
            },
            (_, _, FieldShape::DelimitedList) => Value::Array(
                split_list(&raw).into_iter().map(Value::String).collect(),
            ),
            (_, FieldKind::Number, _) => parse_number(&raw),
            (_, FieldKind::Text | FieldKind::TextArea | FieldKind::FileUpload, _) => {
                Value::String(raw)
            }
        };

        payload.insert(descriptor.name.to_string(), value);
    }

    Extraction { payload, warnings }
}

/// `"React, Node.js ,  "` → `["React", "Node.js"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Empty → null, integer → integer, decimal → float, anything else is kept
/// as the raw text.
pub fn parse_number(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Some(n) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(n);
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::Mutex;

    /// Records uploads; fails for file names listed in `failing`.
    #[derive(Default)]
    pub struct RecordingUploader {
        pub uploads: Mutex<Vec<(String, String)>>,
        pub failing: Vec<String>,
    }

    impl RecordingUploader {
        pub fn failing_on(name: &str) -> Self {
            Self {
                failing: vec![name.to_string()],
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Uploader for RecordingUploader {
        async fn upload(&self, folder: &str, file: UploadFile) -> Result<String, String> {
            if self.failing.contains(&file.file_name) {
                return Err("bucket full".to_string());
            }
            self.uploads
                .lock()
                .unwrap()
                .push((folder.to_string(), file.file_name.clone()));
            Ok(format!("https://cdn.test/{folder}/{}", file.file_name))
        }
    }
}
