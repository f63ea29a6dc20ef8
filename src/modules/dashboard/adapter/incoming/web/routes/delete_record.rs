use actix_web::{post, web, Responder};

use crate::modules::dashboard::adapter::incoming::web::extractors::AdminSession;
use crate::modules::dashboard::adapter::incoming::web::page::dashboard_location;
use crate::modules::dashboard::application::domain::Notice;
use crate::modules::gateway::application::ports::outgoing::RecordId;
use crate::modules::schema::Collection;
use crate::shared::web::see_other;
use crate::AppState;

/// The list item's form asks for confirmation before posting here.
#[post("/admin/{collection}/{id}/delete")]
pub async fn delete_record_handler(
    data: web::Data<AppState>,
    session: AdminSession,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (raw, id) = path.into_inner();
    let Ok(collection) = raw.parse::<Collection>() else {
        return see_other(&dashboard_location(
            None,
            Some(&Notice::error(format!("Unknown section: {raw}"))),
        ));
    };
    let Some(id) = RecordId::new(id) else {
        return see_other(&dashboard_location(Some(collection.table()), None));
    };

    let notice = match data
        .dashboard
        .editor
        .delete(&session.token, collection, &id)
        .await
    {
        Ok(()) => Notice::success(format!("{} deleted.", collection.singular())),
        Err(e) => Notice::error(format!("Error: {e}")),
    };

    see_other(&dashboard_location(Some(collection.table()), Some(&notice)))
}
