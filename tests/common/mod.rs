#![allow(dead_code)]

use eventdesk::domain::event::Event;
use eventdesk::domain::service::Service;
use eventdesk::domain::service_request::{RequestStatus, ServiceRequest};
use eventdesk::repository::errors::{RepositoryError, RepositoryResult};
use eventdesk::repository::{EventReader, ServiceReader, ServiceRequestReader};

/// In-memory stand-in for the platform API.
#[derive(Clone, Default)]
pub struct TestRepository {
    pub events: Vec<Event>,
    pub services: Vec<Service>,
    pub requests: Vec<ServiceRequest>,
    /// When set, every fetch fails with this message.
    pub failure: Option<String>,
}

impl TestRepository {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_events(count: i64) -> Self {
        Self {
            events: (1..=count)
                .map(|id| Event {
                    id,
                    name: format!("Event #{id}"),
                    ..Event::default()
                })
                .collect(),
            ..Self::default()
        }
    }

    fn respond<T: Clone>(&self, items: &[T]) -> RepositoryResult<Vec<T>> {
        match &self.failure {
            Some(message) => Err(RepositoryError::Http(message.clone())),
            None => Ok(items.to_vec()),
        }
    }
}

impl EventReader for TestRepository {
    fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        self.respond(&self.events)
    }
}

impl ServiceReader for TestRepository {
    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        self.respond(&self.services)
    }
}

impl ServiceRequestReader for TestRepository {
    fn list_service_requests(&self) -> RepositoryResult<Vec<ServiceRequest>> {
        self.respond(&self.requests)
    }
}

pub fn request(id: i64, name: &str, status: RequestStatus) -> ServiceRequest {
    ServiceRequest {
        id,
        requester_name: Some(name.to_string()),
        status,
        ..ServiceRequest::default()
    }
}
