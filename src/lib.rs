//! Admin list views for the events and services platform.
//!
//! The `data` feature exposes the domain entities and the list engine on their
//! own; the `server` feature adds the REST fetcher and the Actix-Web front-end.

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{ApiRepository, Repository};
#[cfg(feature = "server")]
use crate::routes::api::{api_v1_events, api_v1_requests, api_v1_services};
#[cfg(feature = "server")]
use crate::routes::catalog::show_services;
#[cfg(feature = "server")]
use crate::routes::events::show_events;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::requests::show_requests;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod listing;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // The blocking HTTP client must not be built or used on an async worker.
    let api_config = server_config.api.clone();
    let repo = web::block(move || ApiRepository::new(&api_config))
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to set up API client: {e}")))?
        .map_err(|e| std::io::Error::other(format!("Failed to set up API client: {e}")))?;
    let repo: Arc<dyn Repository> = Arc::new(repo);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let listing = server_config.listing.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving admin lists from {} on {}:{}",
        server_config.api.base_url,
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_events)
                    .service(api_v1_services)
                    .service(api_v1_requests),
            )
            .service(show_index)
            .service(show_events)
            .service(show_services)
            .service(show_requests)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(repo.clone()))
            .app_data(web::Data::new(listing.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
