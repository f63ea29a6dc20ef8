mod details;
mod page;
mod socials;

pub use details::{description_html, youtube_embed_url, DetailsView};
pub use page::{
    description_preview, preload_urls, AchievementCard, EducationCard, ExperienceCard,
    HeroImageView, HeroView, PageView, ProjectCard,
};
pub use socials::{social_links, SocialLink};
