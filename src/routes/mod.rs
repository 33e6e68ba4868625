//! HTTP handlers for the admin list views and their JSON counterparts.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::list::ListPageData;

pub mod api;
pub mod catalog;
pub mod events;
pub mod main;
pub mod requests;

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Context shared by every page: the active navigation entry and alerts.
pub fn base_context(current_page: &str, alerts: &[(String, &str)]) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("alerts", alerts);
    context
}

/// Loads a list page on the blocking pool and renders it.
///
/// A failed fetch still renders the page, with a danger alert and the list in
/// its `failed` state.
pub async fn render_list_page<T, S, K, F>(
    tera: &Tera,
    template: &str,
    current_page: &str,
    load: F,
) -> HttpResponse
where
    T: Serialize + Send + 'static,
    S: Serialize + Send + 'static,
    K: Serialize + Send + 'static,
    F: FnOnce() -> ListPageData<T, S, K> + Send + 'static,
{
    let data = match web::block(load).await {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load {current_page} list: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let alerts = data
        .list
        .error
        .iter()
        .map(|message| (format!("Could not load data: {message}"), "danger"))
        .collect::<Vec<_>>();

    let mut context = base_context(current_page, &alerts);
    context.insert("list", &data);
    render_template(tera, template, &context)
}

/// Loads a list page on the blocking pool and answers with JSON.
pub async fn json_list_page<T, S, K, F>(name: &str, load: F) -> HttpResponse
where
    T: Serialize + Send + 'static,
    S: Serialize + Send + 'static,
    K: Serialize + Send + 'static,
    F: FnOnce() -> ListPageData<T, S, K> + Send + 'static,
{
    match web::block(load).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to load {name} list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
