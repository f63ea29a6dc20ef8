use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use futures::future::join_all;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use super::extractors::AdminSession;
use crate::modules::collection::Container;
use crate::modules::crop::CropDescriptor;
use crate::modules::dashboard::application::domain::{Notice, NoticeLevel};
use crate::modules::form::FormView;
use crate::modules::gateway::application::ports::outgoing::Record;
use crate::modules::portfolio::application::domain::{GlobalConfig, FRAME_STYLES};
use crate::modules::schema::Collection;
use crate::shared::web::{names, Templates};
use crate::AppState;

pub const GENERAL_TAB: &str = "general";

/// Query string the dashboard is redirected to after every form post.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub notice: Option<String>,
    pub level: Option<NoticeLevel>,
}

impl DashboardQuery {
    pub fn notice(&self) -> Option<Notice> {
        let message = self.notice.as_deref()?.trim();
        if message.is_empty() {
            return None;
        }
        Some(Notice {
            level: self.level.unwrap_or(NoticeLevel::Success),
            message: message.to_string(),
        })
    }
}

/// `/admin` with the tab and notice encoded into the query.
pub fn dashboard_location(tab: Option<&str>, notice: Option<&Notice>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(tab) = tab {
        params.push(("tab", tab));
    }
    if let Some(notice) = notice {
        params.push(("notice", &notice.message));
        params.push(("level", notice.level.as_str()));
    }

    match Url::parse_with_params("http://localhost/admin", &params) {
        Ok(url) => match url.query() {
            Some(query) if !query.is_empty() => format!("/admin?{query}"),
            _ => "/admin".to_string(),
        },
        Err(_) => "/admin".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    General,
    Collection(Collection),
}

impl Tab {
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|t| t.parse::<Collection>().ok())
            .map(Tab::Collection)
            .unwrap_or(Tab::General)
    }
}

pub fn item_template(collection: Collection) -> &'static str {
    match collection {
        Collection::Experience => names::EXPERIENCE_ITEM,
        Collection::Projects => names::PROJECT_ITEM,
        Collection::Achievements => names::ACHIEVEMENT_ITEM,
        Collection::Education => names::EDUCATION_ITEM,
        Collection::Skills => names::SKILL_ITEM,
    }
}

fn render_item(templates: &Templates, collection: Collection, record: &Record) -> String {
    templates
        .render(item_template(collection), record)
        .unwrap_or_else(|e| {
            error!(collection = %collection, error = %e, "List item failed to render");
            String::new()
        })
}

#[derive(Serialize)]
struct TabView {
    id: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Serialize)]
struct FrameOption {
    value: &'static str,
    label: String,
    selected: bool,
}

#[derive(Serialize)]
struct GeneralView {
    active: bool,
    hero_name: String,
    hero_subtitle: String,
    about_text: String,
    resume_url: String,
    linkedin: String,
    github: String,
    facebook: String,
    email: String,
    theme: String,
    frames: Vec<FrameOption>,
    profile_image: Option<String>,
    crop: Option<CropDescriptor>,
}

impl GeneralView {
    fn new(config: &GlobalConfig, active: bool) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let current_frame = config.frame_class();

        Self {
            active,
            hero_name: text(&config.hero_name),
            hero_subtitle: text(&config.hero_subtitle),
            about_text: text(&config.about_text),
            resume_url: text(&config.resume_url),
            linkedin: text(&config.socials.linkedin),
            github: text(&config.socials.github),
            facebook: text(&config.socials.facebook),
            email: text(&config.socials.email),
            theme: text(&config.theme),
            frames: FRAME_STYLES
                .iter()
                .map(|value| FrameOption {
                    value,
                    label: frame_label(value),
                    selected: *value == current_frame,
                })
                .collect(),
            profile_image: config.profile_image.clone(),
            crop: config.profile_crop,
        }
    }
}

/// `frame-hexagon` → `Hexagon`.
fn frame_label(class: &str) -> String {
    let name = class.trim_start_matches("frame-");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize)]
struct SectionView {
    id: &'static str,
    title: &'static str,
    singular: &'static str,
    list_id: String,
    items_html: String,
    empty: bool,
    is_skills: bool,
    active: bool,
}

#[derive(Serialize)]
struct DashboardView {
    user_email: String,
    tabs: Vec<TabView>,
    notice: Option<Notice>,
    general: GeneralView,
    sections: Vec<SectionView>,
    modal: Option<Value>,
}

/// Renders the whole dashboard. Every list is reloaded on each render and
/// a list that fails to load shows up empty.
pub async fn render_dashboard(
    data: &web::Data<AppState>,
    session: &AdminSession,
    tab: Tab,
    notice: Option<Notice>,
    modal: Option<&FormView>,
) -> HttpResponse {
    let tab = match modal {
        Some(view) => Tab::Collection(view.collection),
        None => tab,
    };

    let config = data.portfolio.load_config.execute().await;

    let lists = join_all(Collection::ALL.map(|collection| async move {
        let mut container = Container::new(format!("{}-list", collection.table()));
        data.dashboard
            .lists
            .render(collection, &mut container, |record| {
                render_item(&data.templates, collection, record)
            })
            .await;
        (collection, container)
    }))
    .await;

    let mut tabs = vec![TabView {
        id: GENERAL_TAB,
        label: "General",
        active: tab == Tab::General,
    }];
    tabs.extend(Collection::ALL.iter().map(|c| TabView {
        id: c.table(),
        label: c.plural(),
        active: tab == Tab::Collection(*c),
    }));

    let sections = lists
        .into_iter()
        .map(|(collection, container)| SectionView {
            id: collection.table(),
            title: collection.plural(),
            singular: collection.singular(),
            list_id: container.id.clone(),
            items_html: container.html(),
            empty: container.is_empty(),
            is_skills: collection == Collection::Skills,
            active: tab == Tab::Collection(collection),
        })
        .collect();

    let view = DashboardView {
        user_email: session.user.email.clone().unwrap_or_default(),
        tabs,
        notice,
        general: GeneralView::new(&config, tab == Tab::General),
        sections,
        modal: modal.map(FormView::context),
    };

    data.templates.page(StatusCode::OK, names::DASHBOARD, &view)
}

#[derive(Serialize)]
struct LoginView<'a> {
    notice: Option<&'a Notice>,
    email: &'a str,
}

pub fn render_login(
    templates: &Templates,
    status: StatusCode,
    notice: Option<&Notice>,
    email: &str,
) -> HttpResponse {
    templates.page(status, names::LOGIN, &LoginView { notice, email })
}
