mod admin_auth;
mod record_editor;
mod save_general_settings;

pub use admin_auth::{AdminAuthError, AdminAuthUseCase};
pub use record_editor::{RecordEditorError, RecordEditorUseCase, SubmitOutcome};
pub use save_general_settings::{
    SaveGeneralOutcome, SaveGeneralSettingsError, SaveGeneralSettingsUseCase,
};
