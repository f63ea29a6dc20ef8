mod auth_provider;
mod file_storage;
mod record_store;

pub use auth_provider::{AccessToken, AuthProvider, AuthProviderError, Session, SessionUser};
pub use file_storage::{object_path, FileStorage, FileStorageError, UploadFile};
pub use record_store::{
    BackendHealth, EqFilter, OrderBy, Record, RecordId, RecordStore, RecordStoreError,
    SelectQuery,
};
