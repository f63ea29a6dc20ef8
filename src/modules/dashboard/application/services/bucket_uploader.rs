use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;

use crate::modules::form::Uploader;
use crate::modules::gateway::application::ports::outgoing::{
    object_path, AccessToken, FileStorage, UploadFile,
};

/// Uploads into the site's storage bucket on behalf of the signed-in admin.
pub struct BucketUploader {
    storage: Arc<dyn FileStorage>,
    token: AccessToken,
    bucket: String,
}

impl BucketUploader {
    pub fn new(storage: Arc<dyn FileStorage>, token: AccessToken, bucket: impl Into<String>) -> Self {
        Self {
            storage,
            token,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl Uploader for BucketUploader {
    async fn upload(&self, folder: &str, file: UploadFile) -> Result<String, String> {
        let path = object_path(folder, &file.file_name, Utc::now().timestamp_millis());

        self.storage
            .upload(&self.token, &self.bucket, &path, file)
            .await
            .map_err(|e| {
                warn!(bucket = %self.bucket, path = %path, error = %e, "Upload rejected");
                e.user_message()
            })
    }
}
