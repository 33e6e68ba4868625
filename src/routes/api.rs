//! JSON variants of the list views, sharing their query parameters.

use actix_web::{Responder, get, web};

use crate::dto::list::ListQuery;
use crate::models::config::ListingConfig;
use crate::repository::Repository;
use crate::routes::json_list_page;
use crate::services::catalog::load_services_page;
use crate::services::events::load_events_page;
use crate::services::requests::load_requests_page;

#[get("/v1/events")]
pub async fn api_v1_events(
    query: web::Query<ListQuery>,
    repo: web::Data<dyn Repository>,
    settings: web::Data<ListingConfig>,
) -> impl Responder {
    let query = query.into_inner();
    json_list_page("events", move || {
        load_events_page(repo.get_ref(), &query, &settings)
    })
    .await
}

#[get("/v1/services")]
pub async fn api_v1_services(
    query: web::Query<ListQuery>,
    repo: web::Data<dyn Repository>,
    settings: web::Data<ListingConfig>,
) -> impl Responder {
    let query = query.into_inner();
    json_list_page("services", move || {
        load_services_page(repo.get_ref(), &query, &settings)
    })
    .await
}

#[get("/v1/requests")]
pub async fn api_v1_requests(
    query: web::Query<ListQuery>,
    repo: web::Data<dyn Repository>,
    settings: web::Data<ListingConfig>,
) -> impl Responder {
    let query = query.into_inner();
    json_list_page("requests", move || {
        load_requests_page(repo.get_ref(), &query, &settings)
    })
    .await
}
