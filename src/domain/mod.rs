//! Domain entities fetched from the platform API.

pub mod event;
pub mod service;
pub mod service_request;
pub mod types;
