//! Page loaders for the admin list views.
//!
//! Each loader fetches the full collection, applies the query's filter, sort
//! and page through a [`ListView`] and returns owned page data. Fetch failures
//! never escape: they surface as a `failed` list state with an error message.

use std::num::NonZeroUsize;

use crate::dto::list::{ListPageData, ListQuery};
use crate::listing::{ListView, Listing};
use crate::repository::errors::RepositoryResult;

pub mod catalog;
pub mod events;
pub mod requests;

/// Runs one list view from mount to snapshot.
pub fn load_list_page<L, F>(
    query: &ListQuery,
    page_size: NonZeroUsize,
    window: usize,
    fetch: F,
) -> ListPageData<L::Item, L::Status, L::Sort>
where
    L: Listing,
    L::Item: Clone,
    F: FnOnce() -> RepositoryResult<Vec<L::Item>>,
{
    let mut view = ListView::<L>::new(page_size).with_window(window);
    view.set_filter(query.filter());
    view.load_with(fetch);
    view.set_page(query.page());

    ListPageData::new(view.snapshot().map(Clone::clone))
}
