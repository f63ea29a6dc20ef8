mod config_update;
pub mod entities;
pub(crate) mod lenient;

pub use config_update::{ConfigUpdate, GeneralSettings};
pub use entities::{
    period_label, Achievement, Education, Experience, GlobalConfig, PortfolioPayload, Project,
    Skill, Socials, CONFIG_KEY, CONFIG_TABLE, FRAME_STYLES,
};
