use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};

use crate::modules::dashboard::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::adapter::incoming::web::multipart::read_form;
use crate::modules::dashboard::adapter::incoming::web::page::dashboard_location;
use crate::modules::dashboard::application::domain::Notice;
use crate::modules::form::FormMode;
use crate::modules::gateway::application::ports::outgoing::RecordId;
use crate::modules::schema::Collection;
use crate::shared::web::see_other;
use crate::AppState;

async fn submit(
    data: web::Data<AppState>,
    session: AdminSession,
    raw_collection: &str,
    mode: FormMode,
    payload: Multipart,
) -> HttpResponse {
    let Ok(collection) = raw_collection.parse::<Collection>() else {
        return see_other(&dashboard_location(
            None,
            Some(&Notice::error(format!("Unknown section: {raw_collection}"))),
        ));
    };

    let notice = match read_form(payload).await {
        Err(e) => Notice::error(format!("Error: {e}")),
        Ok(form) => match data
            .dashboard
            .editor
            .submit(&session.token, collection, mode, form)
            .await
        {
            Ok(outcome) => Notice::with_warnings(
                format!("{} saved.", collection.singular()),
                &outcome.warnings,
            ),
            Err(e) => Notice::error(format!("Error: {e}")),
        },
    };

    see_other(&dashboard_location(Some(collection.table()), Some(&notice)))
}

#[post("/admin/{collection}")]
pub async fn create_record_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    path: web::Path<String>,
    payload: Multipart,
) -> impl Responder {
    submit(data, session, &path.into_inner(), FormMode::Create, payload).await
}

#[post("/admin/{collection}/{id}")]
pub async fn update_record_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    path: web::Path<(String, String)>,
    payload: Multipart,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let Some(id) = RecordId::new(id) else {
        return see_other(&dashboard_location(Some(collection.as_str()), None));
    };

    submit(data, session, &collection, FormMode::Edit(id), payload).await
}
