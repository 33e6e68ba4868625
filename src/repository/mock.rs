//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::event::Event;
use crate::domain::service::Service;
use crate::domain::service_request::ServiceRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EventReader, ServiceReader, ServiceRequestReader};

mock! {
    pub Repository {}

    impl EventReader for Repository {
        fn list_events(&self) -> RepositoryResult<Vec<Event>>;
    }

    impl ServiceReader for Repository {
        fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    }

    impl ServiceRequestReader for Repository {
        fn list_service_requests(&self) -> RepositoryResult<Vec<ServiceRequest>>;
    }
}
