use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::field::FieldDescriptor;
use crate::modules::gateway::application::ports::outgoing::OrderBy;

/// The content collections editable from the dashboard.
///
/// The config singleton is not a collection; it has its own form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Experience,
    Projects,
    Achievements,
    Education,
    Skills,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
#[error("Unknown collection: {0}")]
pub struct UnknownCollection(pub String);

const EXPERIENCE: &[FieldDescriptor] = &[
    FieldDescriptor::text("role", "Role"),
    FieldDescriptor::text("company", "Company"),
    FieldDescriptor::text("date", "Date Range"),
    FieldDescriptor::textarea("description", "Description"),
    FieldDescriptor::number("order", "Order"),
];

const PROJECTS: &[FieldDescriptor] = &[
    FieldDescriptor::text("title", "Title"),
    FieldDescriptor::textarea("description", "Description"),
    FieldDescriptor::text("category", "Category"),
    FieldDescriptor::text("status", "Status"),
    FieldDescriptor::list("techstack", "Tech Stack (comma separated)"),
    FieldDescriptor::text("link", "Project Link"),
    FieldDescriptor::text("youtubeurl", "YouTube URL"),
    FieldDescriptor::file("imageurl", "Project Image"),
    FieldDescriptor::file("bannerurl", "Banner Image"),
];

const ACHIEVEMENTS: &[FieldDescriptor] = &[
    FieldDescriptor::text("title", "Title"),
    FieldDescriptor::text("category", "Category"),
    FieldDescriptor::textarea("icon", "Icon (SVG String)"),
    FieldDescriptor::text("youtubeurl", "YouTube URL"),
    FieldDescriptor::file("imageurl", "Image"),
    FieldDescriptor::file("bannerurl", "Banner Image"),
];

const EDUCATION: &[FieldDescriptor] = &[
    FieldDescriptor::text("school", "School"),
    FieldDescriptor::text("major", "Major"),
    FieldDescriptor::text("start_year", "Start Year"),
    FieldDescriptor::text("end_year", "End Year (blank if ongoing)"),
    FieldDescriptor::text("cgpa", "CGPA"),
    FieldDescriptor::text("youtubeurl", "YouTube URL"),
    FieldDescriptor::file("imageurl", "Image"),
    FieldDescriptor::file("bannerurl", "Banner Image"),
];

const SKILLS: &[FieldDescriptor] = &[FieldDescriptor::text("name", "Skill")];

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Experience,
        Collection::Projects,
        Collection::Achievements,
        Collection::Education,
        Collection::Skills,
    ];

    /// Backend table name, also used as the path segment and upload folder.
    pub fn table(self) -> &'static str {
        match self {
            Collection::Experience => "experience",
            Collection::Projects => "projects",
            Collection::Achievements => "achievements",
            Collection::Education => "education",
            Collection::Skills => "skills",
        }
    }

    pub fn schema(self) -> &'static [FieldDescriptor] {
        match self {
            Collection::Experience => EXPERIENCE,
            Collection::Projects => PROJECTS,
            Collection::Achievements => ACHIEVEMENTS,
            Collection::Education => EDUCATION,
            Collection::Skills => SKILLS,
        }
    }

    /// List ordering. Experience sorts on its free-text date, so the order is
    /// lexical rather than chronological.
    pub fn ordering(self) -> Option<OrderBy> {
        match self {
            Collection::Experience => Some(OrderBy::desc("date")),
            Collection::Projects | Collection::Achievements => Some(OrderBy::desc("created_at")),
            Collection::Education => Some(OrderBy::desc("start_year")),
            Collection::Skills => None,
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Collection::Experience => "Experience",
            Collection::Projects => "Project",
            Collection::Achievements => "Achievement",
            Collection::Education => "Education",
            Collection::Skills => "Skill",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Collection::Experience => "Experience",
            Collection::Projects => "Projects",
            Collection::Achievements => "Achievements",
            Collection::Education => "Education",
            Collection::Skills => "Skills",
        }
    }

    /// Skills are only ever added or removed.
    pub fn supports_update(self) -> bool {
        !matches!(self, Collection::Skills)
    }

    pub fn field(self, name: &str) -> Option<&'static FieldDescriptor> {
        self.schema().iter().find(|f| f.name == name)
    }
}

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience" => Ok(Collection::Experience),
            "projects" | "project" => Ok(Collection::Projects),
            "achievements" | "achievement" => Ok(Collection::Achievements),
            "education" => Ok(Collection::Education),
            "skills" | "skill" => Ok(Collection::Skills),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
