use crate::domain::service::Service;
use crate::dto::list::{ListPageData, ListQuery};
use crate::listing::services::{ServiceListing, ServiceSort, ServiceStatus};
use crate::models::config::ListingConfig;
use crate::repository::ServiceReader;
use crate::services::load_list_page;

pub type ServicesPageData = ListPageData<Service, ServiceStatus, ServiceSort>;

/// Loads the admin services list for the given query.
pub fn load_services_page<R>(
    repo: &R,
    query: &ListQuery,
    settings: &ListingConfig,
) -> ServicesPageData
where
    R: ServiceReader + ?Sized,
{
    load_list_page::<ServiceListing, _>(
        query,
        settings.services_per_page,
        settings.page_window,
        || repo.list_services(),
    )
}
