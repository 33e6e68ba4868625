//! List configuration for the admin services view.

use chrono::NaiveDateTime;

use crate::domain::service::Service;
use crate::listing::filter::list_option;
use crate::listing::{ListItem, Listing, SortRule, StatusRule, TextField};

list_option!(
    /// Availability filter of the services list.
    ServiceStatus {
        All => ("all", "All services"),
        Available => ("available", "Bookable"),
        Unavailable => ("unavailable", "No open slots"),
    }
);

list_option!(
    /// Sort key of the services list.
    ServiceSort {
        Newest => ("newest", "Newest first"),
        Oldest => ("oldest", "Oldest first"),
        Name => ("name", "Name"),
        Requests => ("requests", "Most requested"),
    }
);

impl ListItem for Service {
    fn id(&self) -> i64 {
        self.id
    }
}

fn name(service: &Service) -> Option<&str> {
    Some(service.name.as_str()).filter(|name| !name.trim().is_empty())
}

fn description(service: &Service) -> Option<&str> {
    service.description.as_deref()
}

fn category(service: &Service) -> Option<&str> {
    service.category.as_deref()
}

fn created_at(service: &Service) -> Option<NaiveDateTime> {
    service.created_at
}

fn requests(service: &Service) -> Option<usize> {
    service.request_count()
}

fn is_available(service: &Service, now: NaiveDateTime) -> bool {
    service.has_open_slot(now)
}

/// Services whose slots are all known to have ended. Services without any
/// usable slot data match neither availability filter.
fn is_unavailable(service: &Service, now: NaiveDateTime) -> bool {
    service.has_only_closed_slots(now)
}

const SEARCHABLE: &[TextField<Service>] = &[name, description, category];

/// Services list view.
pub struct ServiceListing;

impl Listing for ServiceListing {
    type Item = Service;
    type Status = ServiceStatus;
    type Sort = ServiceSort;

    fn searchable_fields() -> &'static [TextField<Service>] {
        SEARCHABLE
    }

    fn status_rule(status: ServiceStatus) -> StatusRule<Service> {
        match status {
            ServiceStatus::All => StatusRule::Any,
            ServiceStatus::Available => StatusRule::Check(is_available),
            ServiceStatus::Unavailable => StatusRule::Check(is_unavailable),
        }
    }

    fn sort_rule(sort: ServiceSort) -> SortRule<Service> {
        match sort {
            ServiceSort::Newest => SortRule::NewestFirst(created_at),
            ServiceSort::Oldest => SortRule::OldestFirst(created_at),
            ServiceSort::Name => SortRule::ByName(name),
            ServiceSort::Requests => SortRule::MostFirst(requests),
        }
    }
}
