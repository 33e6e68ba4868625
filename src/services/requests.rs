use crate::domain::service_request::ServiceRequest;
use crate::dto::list::{ListPageData, ListQuery};
use crate::listing::requests::{RequestListing, RequestSort, RequestStatusFilter};
use crate::models::config::ListingConfig;
use crate::repository::ServiceRequestReader;
use crate::services::load_list_page;

pub type RequestsPageData = ListPageData<ServiceRequest, RequestStatusFilter, RequestSort>;

/// Loads the admin service-request list for the given query.
pub fn load_requests_page<R>(
    repo: &R,
    query: &ListQuery,
    settings: &ListingConfig,
) -> RequestsPageData
where
    R: ServiceRequestReader + ?Sized,
{
    load_list_page::<RequestListing, _>(
        query,
        settings.requests_per_page,
        settings.page_window,
        || repo.list_service_requests(),
    )
}
