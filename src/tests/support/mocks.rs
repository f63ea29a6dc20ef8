use async_trait::async_trait;
use mockall::mock;

use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, AuthProvider, AuthProviderError, FileStorage, FileStorageError, Record,
    RecordId, RecordStore, RecordStoreError, SelectQuery, Session, SessionUser, UploadFile,
};

mock! {
    pub Store {}

    #[async_trait]
    impl RecordStore for Store {
        async fn select(&self, table: &str, query: SelectQuery) -> Result<Vec<Record>, RecordStoreError>;
        async fn select_one(&self, table: &str, id: &RecordId) -> Result<Option<Record>, RecordStoreError>;
        async fn insert(&self, token: &AccessToken, table: &str, payload: Record) -> Result<Record, RecordStoreError>;
        async fn update(&self, token: &AccessToken, table: &str, id: &RecordId, payload: Record) -> Result<Record, RecordStoreError>;
        async fn delete(&self, token: &AccessToken, table: &str, id: &RecordId) -> Result<(), RecordStoreError>;
        async fn upsert(&self, token: &AccessToken, table: &str, payload: Record, on_conflict: &str) -> Result<Record, RecordStoreError>;
    }
}

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthProvider for Auth {
        async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthProviderError>;
        async fn get_session(&self, token: &AccessToken) -> Result<Option<SessionUser>, AuthProviderError>;
        async fn sign_out(&self, token: &AccessToken) -> Result<(), AuthProviderError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl FileStorage for Storage {
        async fn upload(&self, token: &AccessToken, bucket: &str, path: &str, file: UploadFile) -> Result<String, FileStorageError>;
        fn public_url(&self, bucket: &str, path: &str) -> String;
    }
}
