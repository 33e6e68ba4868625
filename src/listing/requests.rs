//! List configuration for the admin service-request view.

use chrono::NaiveDateTime;

use crate::domain::service_request::{RequestStatus, ServiceRequest};
use crate::listing::filter::list_option;
use crate::listing::{ListItem, Listing, SortRule, StatusRule, TextField};

list_option!(
    /// Workflow filter of the service-request list.
    RequestStatusFilter {
        All => ("all", "All requests"),
        Pending => ("PENDING", "Pending"),
        InProgress => ("IN_PROGRESS", "In progress"),
        Completed => ("COMPLETED", "Completed"),
        Cancelled => ("CANCELLED", "Cancelled"),
    }
);

list_option!(
    /// Sort key of the service-request list.
    RequestSort {
        Newest => ("newest", "Newest first"),
        Oldest => ("oldest", "Oldest first"),
        Name => ("name", "Requester"),
    }
);

impl ListItem for ServiceRequest {
    fn id(&self) -> i64 {
        self.id
    }
}

fn requester(request: &ServiceRequest) -> Option<&str> {
    request.requester_name.as_deref()
}

fn email(request: &ServiceRequest) -> Option<&str> {
    request.email.as_deref()
}

fn service_name(request: &ServiceRequest) -> Option<&str> {
    request.service_name.as_deref()
}

fn message(request: &ServiceRequest) -> Option<&str> {
    request.message.as_deref()
}

fn created_at(request: &ServiceRequest) -> Option<NaiveDateTime> {
    request.created_at
}

fn is_pending(request: &ServiceRequest, _now: NaiveDateTime) -> bool {
    request.status == RequestStatus::Pending
}

fn is_in_progress(request: &ServiceRequest, _now: NaiveDateTime) -> bool {
    request.status == RequestStatus::InProgress
}

fn is_completed(request: &ServiceRequest, _now: NaiveDateTime) -> bool {
    request.status == RequestStatus::Completed
}

fn is_cancelled(request: &ServiceRequest, _now: NaiveDateTime) -> bool {
    request.status == RequestStatus::Cancelled
}

const SEARCHABLE: &[TextField<ServiceRequest>] = &[requester, email, service_name, message];

/// Service-request list view.
pub struct RequestListing;

impl Listing for RequestListing {
    type Item = ServiceRequest;
    type Status = RequestStatusFilter;
    type Sort = RequestSort;

    fn searchable_fields() -> &'static [TextField<ServiceRequest>] {
        SEARCHABLE
    }

    fn status_rule(status: RequestStatusFilter) -> StatusRule<ServiceRequest> {
        match status {
            RequestStatusFilter::All => StatusRule::Any,
            RequestStatusFilter::Pending => StatusRule::Check(is_pending),
            RequestStatusFilter::InProgress => StatusRule::Check(is_in_progress),
            RequestStatusFilter::Completed => StatusRule::Check(is_completed),
            RequestStatusFilter::Cancelled => StatusRule::Check(is_cancelled),
        }
    }

    fn sort_rule(sort: RequestSort) -> SortRule<ServiceRequest> {
        match sort {
            RequestSort::Newest => SortRule::NewestFirst(created_at),
            RequestSort::Oldest => SortRule::OldestFirst(created_at),
            RequestSort::Name => SortRule::ByName(requester),
        }
    }
}
