use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;
use crate::modules::crop::CropDescriptor;
use crate::modules::gateway::application::ports::outgoing::RecordId;

// ============================================================================
// Site configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Socials {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_none()
            && self.github.is_none()
            && self.facebook.is_none()
            && self.email.is_none()
    }
}

/// Value of the `config` row keyed `global`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub hero_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
    /// Trusted HTML.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub about_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub socials: Socials,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub hero_photo_style: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub profile_crop: Option<CropDescriptor>,
}

pub const CONFIG_TABLE: &str = "config";
pub const CONFIG_KEY: &str = "global";

pub const FRAME_STYLES: [&str; 5] = [
    "frame-soft",
    "frame-circle",
    "frame-hexagon",
    "frame-square",
    "frame-blueprint",
];

impl GlobalConfig {
    /// Photo frame class; unknown or missing styles fall back to `frame-soft`.
    pub fn frame_class(&self) -> &str {
        self.hero_photo_style
            .as_deref()
            .filter(|s| FRAME_STYLES.contains(s))
            .unwrap_or(FRAME_STYLES[0])
    }
}

// ============================================================================
// Collections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    /// Free text such as "2021 - Present".
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    /// Stored either as an array or as comma delimited text.
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub techstack: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub youtubeurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub imageurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bannerurl: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Achievement {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    /// Trusted SVG markup.
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub youtubeurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub imageurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bannerurl: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_year: Option<String>,
    /// Absent while ongoing.
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cgpa: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub youtubeurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub imageurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bannerurl: Option<String>,
}

impl Education {
    /// `"2020 - 2024"`, or `"2020 - Present"` while no end year is set.
    pub fn period_label(&self) -> String {
        period_label(self.start_year.as_deref(), self.end_year.as_deref())
    }
}

pub fn period_label(start: Option<&str>, end: Option<&str>) -> String {
    let end = end.map(str::trim).filter(|e| !e.is_empty()).unwrap_or("Present");
    format!("{} - {}", start.unwrap_or_default().trim(), end)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
}

/// Everything the public page shows, one optional section per source.
///
/// A `None` section failed to load; `Some(vec![])` loaded empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PortfolioPayload {
    pub config: Option<GlobalConfig>,
    pub experience: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub skills: Option<Vec<Skill>>,
    pub achievements: Option<Vec<Achievement>>,
    pub education: Option<Vec<Education>>,
}
