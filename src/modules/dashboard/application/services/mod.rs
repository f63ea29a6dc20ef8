mod admin_auth_service;
mod bucket_uploader;
mod record_editor_service;
mod save_general_settings_service;

pub use admin_auth_service::AdminAuthService;
pub use bucket_uploader::BucketUploader;
pub use record_editor_service::RecordEditorService;
pub use save_general_settings_service::SaveGeneralSettingsService;
