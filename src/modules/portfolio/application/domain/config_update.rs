use super::entities::{GlobalConfig, Socials};
use crate::modules::crop::CropDescriptor;

/// Fields edited on the dashboard's General tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralSettings {
    pub hero_name: Option<String>,
    pub hero_subtitle: Option<String>,
    pub about_text: Option<String>,
    pub resume_url: Option<String>,
    pub socials: Socials,
    pub theme: Option<String>,
    pub hero_photo_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigUpdate {
    General(GeneralSettings),
    /// A different image invalidates the stored crop.
    ProfileImage(Option<String>),
    ProfileCrop(CropDescriptor),
    ClearProfileCrop,
}

impl GlobalConfig {
    /// Returns the config with `update` applied; `self` is left as it was.
    pub fn apply(&self, update: ConfigUpdate) -> GlobalConfig {
        let mut next = self.clone();
        match update {
            ConfigUpdate::General(settings) => {
                next.hero_name = settings.hero_name;
                next.hero_subtitle = settings.hero_subtitle;
                next.about_text = settings.about_text;
                next.resume_url = settings.resume_url;
                next.socials = settings.socials;
                next.theme = settings.theme;
                next.hero_photo_style = settings.hero_photo_style;
            }
            ConfigUpdate::ProfileImage(url) => {
                if url != next.profile_image {
                    next.profile_image = url;
                    next.profile_crop = None;
                }
            }
            ConfigUpdate::ProfileCrop(crop) => next.profile_crop = Some(crop),
            ConfigUpdate::ClearProfileCrop => next.profile_crop = None,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop() -> CropDescriptor {
        CropDescriptor::capture(1.0, 2.0, 30.0, 40.0, None, None, None).unwrap()
    }

    fn base() -> GlobalConfig {
        GlobalConfig {
            hero_name: Some("Ada".to_string()),
            profile_image: Some("https://cdn/old.png".to_string()),
            profile_crop: Some(crop()),
            theme: Some("titanium".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn general_update_keeps_image_and_crop() {
        let next = base().apply(ConfigUpdate::General(GeneralSettings {
            hero_name: Some("Grace".to_string()),
            ..Default::default()
        }));

        assert_eq!(next.hero_name.as_deref(), Some("Grace"));
        assert_eq!(next.theme, None);
        assert_eq!(next.profile_image.as_deref(), Some("https://cdn/old.png"));
        assert_eq!(next.profile_crop, Some(crop()));
    }

    #[test]
    fn new_profile_image_clears_crop() {
        let next = base().apply(ConfigUpdate::ProfileImage(Some(
            "https://cdn/new.png".to_string(),
        )));

        assert_eq!(next.profile_image.as_deref(), Some("https://cdn/new.png"));
        assert!(next.profile_crop.is_none());
    }

    #[test]
    fn same_profile_image_keeps_crop() {
        let next = base().apply(ConfigUpdate::ProfileImage(Some(
            "https://cdn/old.png".to_string(),
        )));

        assert_eq!(next.profile_crop, Some(crop()));
    }

    #[test]
    fn crop_can_be_set_and_cleared() {
        let cfg = GlobalConfig::default().apply(ConfigUpdate::ProfileCrop(crop()));
        assert_eq!(cfg.profile_crop, Some(crop()));

        let cleared = cfg.apply(ConfigUpdate::ClearProfileCrop);
        assert!(cleared.profile_crop.is_none());
        assert_eq!(cfg.profile_crop, Some(crop()));
    }
}
