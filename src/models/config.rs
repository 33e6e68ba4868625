//! Configuration model loaded from external sources.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::listing::paginator::DEFAULT_PAGE_WINDOW;

pub const DEFAULT_EVENTS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(6).unwrap();
pub const DEFAULT_SERVICES_PER_PAGE: NonZeroUsize = NonZeroUsize::new(6).unwrap();
pub const DEFAULT_REQUESTS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Connection settings for the platform REST API.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Optional bearer token sent with every request.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Page sizes of the admin list views.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub events_per_page: NonZeroUsize,
    pub services_per_page: NonZeroUsize,
    pub requests_per_page: NonZeroUsize,
    /// Number of page buttons rendered around the current page.
    pub page_window: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            events_per_page: DEFAULT_EVENTS_PER_PAGE,
            services_per_page: DEFAULT_SERVICES_PER_PAGE,
            requests_per_page: DEFAULT_REQUESTS_PER_PAGE,
            page_window: DEFAULT_PAGE_WINDOW,
        }
    }
}
