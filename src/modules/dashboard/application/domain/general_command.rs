use crate::modules::crop::CropDescriptor;
use crate::modules::gateway::application::ports::outgoing::UploadFile;
use crate::modules::portfolio::application::domain::GeneralSettings;

/// What to do with the stored profile crop on save.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CropChange {
    #[default]
    Keep,
    Set(CropDescriptor),
    Clear,
}

/// A submitted General tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveGeneralCommand {
    pub settings: GeneralSettings,
    /// URL already stored, echoed back by the form.
    pub profile_image_url: Option<String>,
    /// Newly picked photo; replaces `profile_image_url` when present.
    pub new_profile_image: Option<UploadFile>,
    pub crop: CropChange,
}
