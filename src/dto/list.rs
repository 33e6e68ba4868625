//! Query and page DTOs shared by every list view.

use serde::{Deserialize, Serialize};

use crate::listing::filter::parse_option;
use crate::listing::{FilterState, ListOption, ListSnapshot};

/// Query parameters accepted by list pages and the JSON API.
///
/// Every field is optional and read leniently: unknown options fall back to
/// their defaults and a non-numeric page becomes page 1.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQuery {
    /// Free-text search entered by the user.
    pub search: Option<String>,
    /// Status filter value, e.g. `upcoming` or `PENDING`.
    pub status: Option<String>,
    /// Sort key, e.g. `newest`.
    pub sort: Option<String>,
    /// Requested page; clamped later against the filtered length.
    pub page: Option<String>,
}

impl ListQuery {
    pub fn filter<S: ListOption, K: ListOption>(&self) -> FilterState<S, K> {
        FilterState::new()
            .search(self.search.as_deref().map(str::trim).unwrap_or_default())
            .status(parse_option(self.status.as_deref()))
            .sort(parse_option(self.sort.as_deref()))
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Dropdown entry rendered by templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl OptionView {
    pub fn list<T: ListOption>(selected: T) -> Vec<OptionView> {
        T::ALL
            .iter()
            .map(|&option| OptionView {
                value: option.value(),
                label: option.label(),
                selected: option == selected,
            })
            .collect()
    }
}

/// Data required to render a list template or answer the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct ListPageData<T, S, K> {
    #[serde(flatten)]
    pub list: ListSnapshot<T, S, K>,
    pub status_options: Vec<OptionView>,
    pub sort_options: Vec<OptionView>,
}

impl<T, S: ListOption, K: ListOption> ListPageData<T, S, K> {
    pub fn new(list: ListSnapshot<T, S, K>) -> Self {
        let status_options = OptionView::list(list.filter.status);
        let sort_options = OptionView::list(list.filter.sort);
        Self {
            list,
            status_options,
            sort_options,
        }
    }
}
