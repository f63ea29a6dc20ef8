use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

use super::AccessToken;

/// A file picked in a dashboard form, fully buffered.
#[derive(Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FileStorageError {
    #[error("Storage rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Network problem: {0}")]
    Network(String),

    #[error("Invalid object path: {0}")]
    InvalidPath(String),
}

impl FileStorageError {
    pub fn user_message(&self) -> String {
        match self {
            FileStorageError::Rejected { message, .. } => message.clone(),
            FileStorageError::Network(_) => "Could not reach the storage service".to_string(),
            FileStorageError::InvalidPath(p) => format!("Invalid file name: {p}"),
        }
    }
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Uploads `file` to `bucket/path` and returns its public URL.
    async fn upload(
        &self,
        token: &AccessToken,
        bucket: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<String, FileStorageError>;

    fn public_url(&self, bucket: &str, path: &str) -> String;
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Object key for an upload: `{folder}/{epoch_millis}_{name}` with every
/// whitespace run in the name collapsed to a single `-`.
pub fn object_path(folder: &str, file_name: &str, epoch_millis: i64) -> String {
    let name = whitespace_runs().replace_all(file_name.trim(), "-");
    format!("{}/{}_{}", folder.trim_matches('/'), epoch_millis, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_path_collapses_whitespace_and_prefixes_timestamp() {
        assert_eq!(
            object_path("projects", "my  cool\tshot.png", 1700000000000),
            "projects/1700000000000_my-cool-shot.png"
        );
    }

    #[test]
    fn object_path_trims_folder_slashes() {
        assert_eq!(
            object_path("/profile/", "me.jpg", 5),
            "profile/5_me.jpg"
        );
    }

    #[test]
    fn upload_file_debug_hides_bytes() {
        let file = UploadFile {
            file_name: "a.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        };
        let out = format!("{:?}", file);
        assert!(out.contains("len: 3"));
        assert!(!out.contains("[1, 2, 3]"));
    }
}
