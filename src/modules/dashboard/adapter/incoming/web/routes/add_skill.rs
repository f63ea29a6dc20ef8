use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::dashboard::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::adapter::incoming::web::page::dashboard_location;
use crate::modules::dashboard::application::domain::Notice;
use crate::modules::schema::Collection;
use crate::shared::web::see_other;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSkillForm {
    #[serde(default)]
    pub name: String,
}

/// Quick-add input on the Skills tab. A blank name is a no-op.
#[post("/admin/skills/add")]
pub async fn add_skill_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    form: web::Form<AddSkillForm>,
) -> impl Responder {
    let notice = match data
        .dashboard
        .editor
        .add_skill(&session.token, &form.name)
        .await
    {
        Ok(true) => Some(Notice::success("Skill added.")),
        Ok(false) => None,
        Err(e) => Some(Notice::error(format!("Error: {e}"))),
    };

    see_other(&dashboard_location(
        Some(Collection::Skills.table()),
        notice.as_ref(),
    ))
}
