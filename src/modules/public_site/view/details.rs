use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::modules::gateway::application::ports::outgoing::Record;
use crate::modules::portfolio::application::domain::{lenient, period_label};

fn youtube_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("static regex")
    })
}

/// Embed URL for a YouTube link, if it carries an 11-character video id.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let id = youtube_pattern().captures(url)?.get(2)?.as_str();
    (id.chars().count() == 11).then(|| format!("https://www.youtube.com/embed/{id}"))
}

/// Escapes the text and turns each newline into `<br>`.
pub fn description_html(text: &str) -> String {
    handlebars::html_escape(text).replace('\n', "<br>")
}

#[derive(Debug, Default, Deserialize)]
struct DetailsRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    school: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    major: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    start_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    end_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    techstack: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    youtubeurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    imageurl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    bannerurl: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailsView {
    pub video_url: Option<String>,
    /// Banner, else thumbnail. Unset when a video is shown.
    pub banner: Option<String>,
    pub badge: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description_html: Option<String>,
    pub techstack: Vec<String>,
    pub link: Option<String>,
}

impl DetailsView {
    /// Education records are recognised by their `school` attribute; every
    /// other record is shown as a project-like entry.
    pub fn from_record(record: &Record) -> Self {
        let is_education = record.contains_key("school");
        let item: DetailsRecord =
            serde_json::from_value(serde_json::Value::Object(record.clone())).unwrap_or_default();

        let video_url = item.youtubeurl.as_deref().and_then(youtube_embed_url);
        let banner = match video_url {
            Some(_) => None,
            None => item.bannerurl.clone().or_else(|| item.imageurl.clone()),
        };

        let (badge, title, subtitle) = if is_education {
            (
                Some(period_label(
                    item.start_year.as_deref(),
                    item.end_year.as_deref(),
                )),
                item.school.unwrap_or_default(),
                item.major.unwrap_or_default(),
            )
        } else {
            (
                item.status,
                item.title.unwrap_or_default(),
                item.category.unwrap_or_default(),
            )
        };

        Self {
            video_url,
            banner,
            badge,
            title,
            subtitle,
            description_html: item.description.as_deref().map(description_html),
            techstack: item.techstack,
            link: item.link,
        }
    }
}
