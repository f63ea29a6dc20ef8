use actix_web::{get, http::StatusCode, web, Responder};
use chrono::{Datelike, Utc};

use crate::modules::crop::prepare_profile_image;
use crate::modules::public_site::view::PageView;
use crate::shared::web::names;
use crate::AppState;

/// PUBLIC PAGE
/// - One aggregated fetch, sections rendered independently
/// - Profile crop resolved server-side when the photo can be probed
#[get("/")]
pub async fn get_index_handler(data: web::Data<AppState>) -> impl Responder {
    let payload = data.portfolio.fetch.execute().await;

    let photo = payload
        .config
        .as_ref()
        .and_then(|cfg| cfg.profile_image.clone().map(|src| (src, cfg.profile_crop)));

    let profile_image = match photo {
        Some((src, crop)) => Some(prepare_profile_image(data.image_probe.as_ref(), &src, crop).await),
        None => None,
    };

    let view = PageView::build(&payload, profile_image.as_ref(), Utc::now().year());
    data.templates.page(StatusCode::OK, names::PUBLIC_PAGE, &view)
}
