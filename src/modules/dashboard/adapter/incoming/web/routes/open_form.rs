use actix_web::{get, web, HttpResponse, Responder};

use crate::modules::dashboard::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::adapter::incoming::web::page::{
    dashboard_location, render_dashboard, Tab,
};
use crate::modules::dashboard::application::domain::Notice;
use crate::modules::gateway::application::ports::outgoing::RecordId;
use crate::modules::schema::Collection;
use crate::shared::web::see_other;
use crate::AppState;

fn unknown_section(raw: &str) -> HttpResponse {
    see_other(&dashboard_location(
        None,
        Some(&Notice::error(format!("Unknown section: {raw}"))),
    ))
}

/// Dashboard with an empty create form open.
#[get("/admin/{collection}/new")]
pub async fn new_record_form_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    path: web::Path<String>,
) -> impl Responder {
    let raw = path.into_inner();
    let Ok(collection) = raw.parse::<Collection>() else {
        return unknown_section(&raw);
    };

    match data.dashboard.editor.open_create(collection) {
        Ok(view) => render_dashboard(&data, &session, Tab::Collection(collection), None, Some(&view)).await,
        Err(e) => see_other(&dashboard_location(
            Some(collection.table()),
            Some(&Notice::error(format!("Error: {e}"))),
        )),
    }
}

/// Dashboard with the edit form open, prefilled from the stored record.
#[get("/admin/{collection}/{id}/edit")]
pub async fn edit_record_form_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (raw, id) = path.into_inner();
    let Ok(collection) = raw.parse::<Collection>() else {
        return unknown_section(&raw);
    };
    let Some(id) = RecordId::new(id) else {
        return see_other(&dashboard_location(Some(collection.table()), None));
    };

    match data.dashboard.editor.open_edit(collection, id).await {
        Ok(view) => render_dashboard(&data, &session, Tab::Collection(collection), None, Some(&view)).await,
        Err(e) => see_other(&dashboard_location(
            Some(collection.table()),
            Some(&Notice::error(format!("Error: {e}"))),
        )),
    }
}
