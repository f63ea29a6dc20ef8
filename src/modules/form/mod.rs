//! Schema-driven forms: build a view, fill it from a record, read a payload
//! back out of a submission.

pub mod extract;
pub mod session;
pub mod view;

pub use extract::{extract, split_list, Extraction, FormState, Uploader};
pub use session::{ModalError, ModalSession};
pub use view::{FieldWidget, FormMode, FormView};
