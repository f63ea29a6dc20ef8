/// Input kind of a form field. Every consumer matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
    FileUpload,
}

/// How a field's value is stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Scalar,
    /// Comma separated in the form, an ordered list of strings on the record.
    DelimitedList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Record attribute key. Renaming it is a schema migration.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub shape: FieldShape,
}

impl FieldDescriptor {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::scalar(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::scalar(name, label, FieldKind::Number)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::scalar(name, label, FieldKind::TextArea)
    }

    pub const fn file(name: &'static str, label: &'static str) -> Self {
        Self::scalar(name, label, FieldKind::FileUpload)
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            shape: FieldShape::DelimitedList,
        }
    }

    const fn scalar(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            shape: FieldShape::Scalar,
        }
    }

    #[cfg(test)]
    pub fn is_list(&self) -> bool {
        self.shape == FieldShape::DelimitedList
    }
}
