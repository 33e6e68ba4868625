use actix_web::{Responder, get, web};
use tera::Tera;

use crate::dto::list::ListQuery;
use crate::models::config::ListingConfig;
use crate::repository::Repository;
use crate::routes::render_list_page;
use crate::services::catalog::load_services_page;

#[get("/services")]
pub async fn show_services(
    query: web::Query<ListQuery>,
    repo: web::Data<dyn Repository>,
    settings: web::Data<ListingConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();
    render_list_page(&tera, "services/index.html", "services", move || {
        load_services_page(repo.get_ref(), &query, &settings)
    })
    .await
}
