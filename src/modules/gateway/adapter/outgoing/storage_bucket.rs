use async_trait::async_trait;
use tracing::{error, info};

use super::rest_client::{HttpMethod, SupabaseClient, SupabaseError};
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, FileStorage, FileStorageError, UploadFile,
};

/// `FileStorage` over the hosted object storage service.
#[derive(Clone)]
pub struct StorageBucket {
    client: SupabaseClient,
}

impl StorageBucket {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// `{base}/storage/v1/object[/public]/{bucket}/{path}` with every path
    /// segment percent-encoded.
    fn object_url(&self, public: bool, bucket: &str, path: &str) -> Result<String, FileStorageError> {
        let mut url = reqwest::Url::parse(&self.client.config().storage_endpoint("object"))
            .map_err(|e| FileStorageError::InvalidPath(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FileStorageError::InvalidPath("base URL cannot hold a path".into()))?;
            if public {
                segments.push("public");
            }
            segments.push(bucket);
            for part in path.split('/') {
                segments.push(part);
            }
        }
        Ok(url.to_string())
    }
}

fn validate_path(path: &str) -> Result<(), FileStorageError> {
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");
    if invalid {
        return Err(FileStorageError::InvalidPath(path.to_string()));
    }
    Ok(())
}

#[async_trait]
impl FileStorage for StorageBucket {
    async fn upload(
        &self,
        token: &AccessToken,
        bucket: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<String, FileStorageError> {
        validate_path(path)?;

        let url = self.object_url(false, bucket, path)?;
        let content_type = file
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let size = file.bytes.len();

        let request = self
            .client
            .request(HttpMethod::Post, url, Some(token))
            .header("x-upsert", "false")
            .raw(&content_type, file.bytes);

        match self.client.execute(request).await {
            Ok(_) => {
                info!(bucket, path, size, "File uploaded");
                Ok(self.public_url(bucket, path))
            }
            Err(e) => {
                error!(bucket, path, error = %e, "File upload failed");
                Err(match e {
                    SupabaseError::Status { status, message } => {
                        FileStorageError::Rejected { status, message }
                    }
                    SupabaseError::Network(msg) => FileStorageError::Network(msg),
                    SupabaseError::InvalidUrl(msg) => FileStorageError::InvalidPath(msg),
                })
            }
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        self.object_url(true, bucket, path).unwrap_or_else(|_| {
            self.client
                .config()
                .storage_endpoint(&format!("object/public/{bucket}/{path}"))
        })
    }
}
