use serde::Serialize;
use std::collections::BTreeSet;

use super::socials::{social_links, SocialLink};
use crate::modules::crop::ProfileImage;
use crate::modules::portfolio::application::domain::{
    Achievement, Education, Experience, GlobalConfig, PortfolioPayload, Project, Skill,
};

const DEFAULT_RESUME: &str = "assets/cv.pdf";
const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const GRID_THEME: &str = "titanium";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<HeroImageView>,
    pub frame_class: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroImageView {
    pub src: String,
    /// Crop transform, when one could be applied.
    pub style: Option<String>,
    pub cropped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceCard {
    pub date: String,
    pub role: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub status: String,
    pub category: String,
    pub description_preview: String,
    pub techstack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationCard {
    pub id: String,
    pub school: String,
    pub major: String,
    pub period: String,
    pub cgpa: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: Option<String>,
    pub image: Option<String>,
    /// Trusted SVG, only shown when there is no image.
    pub icon: Option<String>,
}

/// Everything the public page template needs.
///
/// Sections are `None` when their source failed to load or came back empty,
/// so the template keeps its default content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub theme: Option<String>,
    pub grid_bg: bool,
    pub nav_logo_text: String,
    pub nav_logo_image: Option<String>,
    pub hero: HeroView,
    pub about_html: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub experience: Option<Vec<ExperienceCard>>,
    pub projects: Option<Vec<ProjectCard>>,
    pub education: Option<Vec<EducationCard>>,
    pub skills: Option<Vec<String>>,
    pub achievements: Option<Vec<AchievementCard>>,
    pub preload: Vec<String>,
    pub year: i32,
}

impl PageView {
    pub fn build(payload: &PortfolioPayload, profile_image: Option<&ProfileImage>, year: i32) -> Self {
        let default_config = GlobalConfig::default();
        let config = payload.config.as_ref().unwrap_or(&default_config);

        let theme = config.theme.clone();
        let grid_bg = theme.as_deref() == Some(GRID_THEME);

        let nav_logo_text = config
            .hero_name
            .as_deref()
            .unwrap_or("Portfolio")
            .to_uppercase();

        let image = profile_image.map(|img| HeroImageView {
            src: img.src.clone(),
            style: img.style(),
            cropped: img.is_cropped(),
        });

        let hero = HeroView {
            name: config.hero_name.clone(),
            subtitle: config.hero_subtitle.clone(),
            image,
            frame_class: config.frame_class().to_string(),
            resume_url: config
                .resume_url
                .clone()
                .unwrap_or_else(|| DEFAULT_RESUME.to_string()),
        };

        Self {
            theme,
            grid_bg,
            nav_logo_text,
            nav_logo_image: config.profile_image.clone(),
            hero,
            about_html: config.about_text.clone(),
            social_links: social_links(&config.socials),
            experience: section(&payload.experience, experience_card),
            projects: section(&payload.projects, project_card),
            education: section(&payload.education, education_card),
            skills: section(&payload.skills, |s: &Skill| s.name.clone().unwrap_or_default()),
            achievements: section(&payload.achievements, achievement_card),
            preload: preload_urls(payload),
            year,
        }
    }
}

fn section<T, V>(items: &Option<Vec<T>>, card: impl Fn(&T) -> V) -> Option<Vec<V>> {
    match items {
        Some(items) if !items.is_empty() => Some(items.iter().map(card).collect()),
        _ => None,
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn experience_card(e: &Experience) -> ExperienceCard {
    ExperienceCard {
        date: text(&e.date),
        role: text(&e.role),
        company: text(&e.company),
        description: text(&e.description),
    }
}

fn project_card(p: &Project) -> ProjectCard {
    ProjectCard {
        id: p.id.to_string(),
        title: text(&p.title),
        image: p.imageurl.clone(),
        status: p.status.clone().unwrap_or_else(|| "Project".to_string()),
        category: p.category.clone().unwrap_or_else(|| "Development".to_string()),
        description_preview: description_preview(p.description.as_deref()),
        techstack: p.techstack.clone(),
    }
}

fn education_card(e: &Education) -> EducationCard {
    EducationCard {
        id: e.id.to_string(),
        school: text(&e.school),
        major: text(&e.major),
        period: e.period_label(),
        cgpa: e.cgpa.clone(),
        image: e.imageurl.clone(),
    }
}

fn achievement_card(a: &Achievement) -> AchievementCard {
    AchievementCard {
        id: a.id.to_string(),
        title: text(&a.title),
        category: text(&a.category),
        date: a.date.clone(),
        image: a.imageurl.clone(),
        icon: a.icon.clone().filter(|_| a.imageurl.is_none()),
    }
}

/// First 100 characters followed by `...`; empty when there is no
/// description.
pub fn description_preview(description: Option<&str>) -> String {
    match description {
        Some(d) => {
            let head: String = d.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{head}...")
        }
        None => String::new(),
    }
}

/// Unique image URLs worth fetching ahead of time: the profile photo,
/// project thumbnails and banners, education and achievement thumbnails.
pub fn preload_urls(payload: &PortfolioPayload) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut urls = Vec::new();
    let mut push = |url: &Option<String>| {
        if let Some(url) = url {
            if seen.insert(url.clone()) {
                urls.push(url.clone());
            }
        }
    };

    if let Some(config) = &payload.config {
        push(&config.profile_image);
    }
    for p in payload.projects.iter().flatten() {
        push(&p.imageurl);
        push(&p.bannerurl);
    }
    for e in payload.education.iter().flatten() {
        push(&e.imageurl);
    }
    for a in payload.achievements.iter().flatten() {
        push(&a.imageurl);
    }

    urls
}
