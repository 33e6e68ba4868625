//! Entity fetchers backed by the platform REST API.
//!
//! Every reader returns a full collection snapshot; filtering, ordering and
//! paging happen client-side in [`crate::listing`].

use crate::domain::event::Event;
use crate::domain::service::Service;
use crate::domain::service_request::ServiceRequest;
use crate::repository::errors::RepositoryResult;

pub mod api;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use api::ApiRepository;

pub trait EventReader {
    fn list_events(&self) -> RepositoryResult<Vec<Event>>;
}

pub trait ServiceReader {
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
}

pub trait ServiceRequestReader {
    fn list_service_requests(&self) -> RepositoryResult<Vec<ServiceRequest>>;
}

/// Everything the HTTP layer needs, shareable across worker threads.
pub trait Repository: EventReader + ServiceReader + ServiceRequestReader + Send + Sync {}

impl<T> Repository for T where T: EventReader + ServiceReader + ServiceRequestReader + Send + Sync {}
