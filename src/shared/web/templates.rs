use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use tracing::error;

use super::html::{html_fragment, html_page};

pub mod names {
    pub const PUBLIC_PAGE: &str = "public/index";
    pub const DETAILS: &str = "public/details";
    pub const LOGIN: &str = "dashboard/login";
    pub const DASHBOARD: &str = "dashboard/index";
    pub const EXPERIENCE_ITEM: &str = "dashboard/experience_item";
    pub const PROJECT_ITEM: &str = "dashboard/project_item";
    pub const ACHIEVEMENT_ITEM: &str = "dashboard/achievement_item";
    pub const EDUCATION_ITEM: &str = "dashboard/education_item";
    pub const SKILL_ITEM: &str = "dashboard/skill_item";
}

const TEMPLATES: &[(&str, &str)] = &[
    (
        names::PUBLIC_PAGE,
        include_str!("../../../templates/public/index.hbs"),
    ),
    (
        names::DETAILS,
        include_str!("../../../templates/public/details.hbs"),
    ),
    (
        names::LOGIN,
        include_str!("../../../templates/dashboard/login.hbs"),
    ),
    (
        names::DASHBOARD,
        include_str!("../../../templates/dashboard/index.hbs"),
    ),
    (
        names::EXPERIENCE_ITEM,
        include_str!("../../../templates/dashboard/experience_item.hbs"),
    ),
    (
        names::PROJECT_ITEM,
        include_str!("../../../templates/dashboard/project_item.hbs"),
    ),
    (
        names::ACHIEVEMENT_ITEM,
        include_str!("../../../templates/dashboard/achievement_item.hbs"),
    ),
    (
        names::EDUCATION_ITEM,
        include_str!("../../../templates/dashboard/education_item.hbs"),
    ),
    (
        names::SKILL_ITEM,
        include_str!("../../../templates/dashboard/skill_item.hbs"),
    ),
];

const PARTIALS: &[(&str, &str)] = &[
    (
        "social_links",
        include_str!("../../../templates/partials/social_links.hbs"),
    ),
    (
        "record_form",
        include_str!("../../../templates/partials/record_form.hbs"),
    ),
];

/// Every page and fragment template, compiled once at start-up.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String, RenderError> {
        self.registry.render(name, context)
    }

    /// Renders a full page; a template failure becomes a logged 500.
    pub fn page<T: Serialize>(&self, status: StatusCode, name: &str, context: &T) -> HttpResponse {
        match self.render(name, context) {
            Ok(body) => html_page(status, body),
            Err(e) => Self::failure(name, &e),
        }
    }

    pub fn fragment<T: Serialize>(
        &self,
        status: StatusCode,
        name: &str,
        context: &T,
    ) -> HttpResponse {
        match self.render(name, context) {
            Ok(body) => html_fragment(status, body),
            Err(e) => Self::failure(name, &e),
        }
    }

    fn failure(name: &str, err: &RenderError) -> HttpResponse {
        error!(template = name, error = %err, "Template rendering failed");
        html_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<!doctype html><title>Error</title><p>Something went wrong.</p>".to_string(),
        )
    }
}
