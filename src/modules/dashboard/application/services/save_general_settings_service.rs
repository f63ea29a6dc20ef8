use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::bucket_uploader::BucketUploader;
use crate::modules::dashboard::application::domain::{CropChange, SaveGeneralCommand};
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    SaveGeneralOutcome, SaveGeneralSettingsError, SaveGeneralSettingsUseCase,
};
use crate::modules::form::Uploader;
use crate::modules::gateway::application::ports::outgoing::{
    AccessToken, FileStorage, Record, RecordStore,
};
use crate::modules::portfolio::application::config_state::ConfigState;
use crate::modules::portfolio::application::domain::{
    ConfigUpdate, GlobalConfig, CONFIG_KEY, CONFIG_TABLE,
};
use crate::modules::portfolio::application::services::read_global_config;

const PROFILE_FOLDER: &str = "profile";

/// Saves the General tab into the `global` config row.
///
/// The stored row is re-read first so keys the form does not carry survive
/// the write. Photo changes go through the config reducer, which drops a crop
/// that belonged to a previous photo.
pub struct SaveGeneralSettingsService {
    store: Arc<dyn RecordStore>,
    storage: Arc<dyn FileStorage>,
    bucket: String,
    state: Arc<ConfigState>,
}

impl SaveGeneralSettingsService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        storage: Arc<dyn FileStorage>,
        bucket: impl Into<String>,
        state: Arc<ConfigState>,
    ) -> Self {
        Self {
            store,
            storage,
            bucket: bucket.into(),
            state,
        }
    }

    async fn current(&self) -> GlobalConfig {
        match read_global_config(self.store.as_ref()).await {
            Ok(cfg) => cfg.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Config re-read failed, saving over last snapshot");
                (*self.state.snapshot().await).clone()
            }
        }
    }
}

#[async_trait]
impl SaveGeneralSettingsUseCase for SaveGeneralSettingsService {
    async fn execute(
        &self,
        token: &AccessToken,
        command: SaveGeneralCommand,
    ) -> Result<SaveGeneralOutcome, SaveGeneralSettingsError> {
        let mut warnings = Vec::new();
        let current = self.current().await;
        let mut next = current.apply(ConfigUpdate::General(command.settings));

        let image = match command.new_profile_image {
            Some(file) => {
                let uploader =
                    BucketUploader::new(self.storage.clone(), token.clone(), self.bucket.clone());
                match uploader.upload(PROFILE_FOLDER, file).await {
                    Ok(url) => Some(url),
                    Err(message) => {
                        warnings.push(format!("Profile image: upload failed ({message})"));
                        None
                    }
                }
            }
            None => command.profile_image_url.filter(|u| !u.trim().is_empty()),
        };
        next = next.apply(ConfigUpdate::ProfileImage(image));

        let photo_changed = next.profile_image != current.profile_image;
        next = match command.crop {
            CropChange::Keep => next,
            // The form echoes the stored rectangle back; it must not follow a new photo.
            CropChange::Set(crop) if photo_changed && current.profile_crop == Some(crop) => next,
            CropChange::Set(crop) => next.apply(ConfigUpdate::ProfileCrop(crop)),
            CropChange::Clear => next.apply(ConfigUpdate::ClearProfileCrop),
        };

        let value = serde_json::to_value(&next)
            .map_err(|e| SaveGeneralSettingsError::Encode(e.to_string()))?;
        let mut row = Record::new();
        row.insert("key".to_string(), Value::String(CONFIG_KEY.to_string()));
        row.insert("value".to_string(), value);

        self.store
            .upsert(token, CONFIG_TABLE, row, "key")
            .await
            .map_err(|e| {
                warn!(error = %e, "Config write rejected");
                SaveGeneralSettingsError::Write(e.user_message())
            })?;

        let config = self.state.replace(next).await;
        info!(warnings = warnings.len(), "Site settings saved");

        Ok(SaveGeneralOutcome { config, warnings })
    }
}
