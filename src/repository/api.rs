//! REST implementation of the entity fetchers.
//!
//! Each list view fetches its whole collection in one `GET`; no filtering or
//! paging parameters are sent. Calls block, so async callers should run them
//! on a blocking pool.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::domain::event::Event;
use crate::domain::service::Service;
use crate::domain::service_request::ServiceRequest;
use crate::domain::types::ApiBaseUrl;
use crate::models::config::ApiConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{EventReader, ServiceReader, ServiceRequestReader};

pub const EVENTS_PATH: &str = "events";
pub const SERVICES_PATH: &str = "services";
pub const SERVICE_REQUESTS_PATH: &str = "service-requests";

/// Fetches collections from the platform API.
#[derive(Clone, Debug)]
pub struct ApiRepository {
    client: Client,
    base_url: ApiBaseUrl,
}

impl ApiRepository {
    pub fn new(config: &ApiConfig) -> RepositoryResult<Self> {
        let base_url = ApiBaseUrl::new(config.base_url.as_str())?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.token.as_deref().filter(|t| !t.trim().is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|e| RepositoryError::ValidationError(format!("Invalid API token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<Vec<T>> {
        let url = self.base_url.join(path);
        log::debug!("Fetching {url}");

        let response = self.client.get(&url).send()?.error_for_status()?;
        let body = response.text()?;
        let items = decode_collection(&body)?;

        log::debug!("Fetched {} items from {url}", items.len());
        Ok(items)
    }
}

/// Decodes a JSON array record by record.
///
/// A record that cannot be read at all (e.g. no usable `id`) is logged and
/// dropped; only a body that is not a JSON array fails.
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> RepositoryResult<Vec<T>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let total = records.len();

    let items: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("Skipping unreadable record #{index}: {err}");
                None
            }
        })
        .collect();

    if items.len() < total {
        log::warn!("Dropped {} of {total} records", total - items.len());
    }
    Ok(items)
}

impl EventReader for ApiRepository {
    fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        self.fetch_collection(EVENTS_PATH)
    }
}

impl ServiceReader for ApiRepository {
    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        self.fetch_collection(SERVICES_PATH)
    }
}

impl ServiceRequestReader for ApiRepository {
    fn list_service_requests(&self) -> RepositoryResult<Vec<ServiceRequest>> {
        self.fetch_collection(SERVICE_REQUESTS_PATH)
    }
}
