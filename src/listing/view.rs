//! Per-view state machine: load status, filter selection and current page.

use std::fmt::Display;
use std::num::NonZeroUsize;

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::listing::paginator::DEFAULT_PAGE_WINDOW;
use crate::listing::{FilterState, Listing, PageState, Paginated, pipeline};

/// Source of the current time for status filters.
pub type Clock = fn() -> NaiveDateTime;

fn system_clock() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Fetch lifecycle of a list view.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    /// Fetch failed; holds a message suitable for display.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Why a loaded view has nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The API returned an empty collection.
    NoData,
    /// Items exist but the current filters exclude all of them.
    NoMatches,
}

/// Everything a template or API response needs to render one page.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ListSnapshot<T, S, K> {
    pub state: &'static str,
    pub error: Option<String>,
    pub empty: Option<EmptyState>,
    pub filter: FilterState<S, K>,
    /// Number of fetched items before filtering.
    pub source_total: usize,
    pub page: Paginated<T>,
}

impl<T, S, K> ListSnapshot<T, S, K> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListSnapshot<U, S, K> {
        ListSnapshot {
            state: self.state,
            error: self.error,
            empty: self.empty,
            filter: self.filter,
            source_total: self.source_total,
            page: self.page.map(f),
        }
    }
}

/// State of one mounted list view.
///
/// Every filter change re-runs the pipeline immediately and re-clamps the page,
/// so the current page is always valid for the filtered length. `now` is read
/// from the clock once per recompute.
pub struct ListView<L: Listing> {
    load: LoadState<L::Item>,
    filter: FilterState<L::Status, L::Sort>,
    page: PageState,
    window: usize,
    clock: Clock,
    /// Instant captured by the last recompute.
    now: NaiveDateTime,
    /// Number of loaded items passing the current filters.
    filtered_len: usize,
}

impl<L: Listing> ListView<L> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            load: LoadState::Idle,
            filter: FilterState::default(),
            page: PageState::new(page_size),
            window: DEFAULT_PAGE_WINDOW,
            clock: system_clock,
            now: system_clock(),
            filtered_len: 0,
        }
    }

    /// Replaces the time source used by status filters.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.recompute();
        self
    }

    /// Sets how many page buttons the snapshot exposes.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn load_state(&self) -> &LoadState<L::Item> {
        &self.load
    }

    pub fn filter(&self) -> &FilterState<L::Status, L::Sort> {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.filtered_len)
    }

    /// Number of items passing the current filters.
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// Enters `Loading`. Also used to retry after a failure.
    pub fn begin_load(&mut self) {
        log::debug!("List view {} -> loading", self.load.name());
        self.load = LoadState::Loading;
        self.filtered_len = 0;
    }

    /// Stores a fetch outcome, fully replacing any previous items.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<L::Item>, E>) {
        self.load = match result {
            Ok(items) => {
                log::debug!("List view loaded {} items", items.len());
                LoadState::Loaded(items)
            }
            Err(err) => {
                log::error!("Failed to load list: {err}");
                LoadState::Failed(err.to_string())
            }
        };
        self.recompute();
    }

    /// Runs `fetch` between [`Self::begin_load`] and [`Self::finish_load`].
    pub fn load_with<E, F>(&mut self, fetch: F)
    where
        E: Display,
        F: FnOnce() -> Result<Vec<L::Item>, E>,
    {
        self.begin_load();
        self.finish_load(fetch());
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
        self.filters_changed();
    }

    pub fn set_status(&mut self, status: L::Status) {
        self.filter.status = status;
        self.filters_changed();
    }

    pub fn set_sort(&mut self, sort: L::Sort) {
        self.filter.sort = sort;
        self.filters_changed();
    }

    /// Applies a whole filter selection at once.
    pub fn set_filter(&mut self, filter: FilterState<L::Status, L::Sort>) {
        self.filter = filter;
        self.filters_changed();
    }

    /// Restores default search, status and sort.
    pub fn clear_filters(&mut self) {
        self.set_filter(FilterState::default());
    }

    /// Moves to page `requested`, clamped into range.
    pub fn set_page(&mut self, requested: i64) {
        self.page.set_page(requested, self.filtered_len);
    }

    /// All items passing the current filters, sorted.
    ///
    /// Empty unless the view is `Loaded`.
    pub fn ordered(&self) -> Vec<&L::Item> {
        match &self.load {
            LoadState::Loaded(items) => pipeline::run::<L>(items, &self.filter, self.now),
            _ => Vec::new(),
        }
    }

    /// Items on the current page, in display order.
    pub fn visible(&self) -> Vec<&L::Item> {
        self.page.slice(&self.ordered()).to_vec()
    }

    /// Renders the current state into a serialisable page.
    pub fn snapshot(&self) -> ListSnapshot<&L::Item, L::Status, L::Sort> {
        let source_total = match &self.load {
            LoadState::Loaded(items) => items.len(),
            _ => 0,
        };
        let ordered = self.ordered();

        let empty = match &self.load {
            LoadState::Loaded(_) if source_total == 0 => Some(EmptyState::NoData),
            LoadState::Loaded(_) if ordered.is_empty() => Some(EmptyState::NoMatches),
            _ => None,
        };

        let error = match &self.load {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        };

        ListSnapshot {
            state: self.load.name(),
            error,
            empty,
            filter: self.filter.clone(),
            source_total,
            page: Paginated::new(&ordered, &self.page, self.window),
        }
    }

    fn filters_changed(&mut self) {
        self.page.reset();
        self.recompute();
    }

    /// Re-runs the pipeline against a fresh `now` and re-clamps the page.
    fn recompute(&mut self) {
        self.now = (self.clock)();
        self.filtered_len = self.ordered().len();
        self.page.clamp(self.filtered_len);
    }
}
