use crate::domain::event::Event;
use crate::dto::list::{ListPageData, ListQuery};
use crate::listing::events::{EventListing, EventSort, EventStatus};
use crate::models::config::ListingConfig;
use crate::repository::EventReader;
use crate::services::load_list_page;

pub type EventsPageData = ListPageData<Event, EventStatus, EventSort>;

/// Loads the admin events list for the given query.
pub fn load_events_page<R>(repo: &R, query: &ListQuery, settings: &ListingConfig) -> EventsPageData
where
    R: EventReader + ?Sized,
{
    load_list_page::<EventListing, _>(
        query,
        settings.events_per_page,
        settings.page_window,
        || repo.list_events(),
    )
}
