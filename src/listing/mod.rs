//! Entity-agnostic list engine shared by every admin list view.
//!
//! A list view fetches a whole collection, filters it with a [`Predicate`],
//! orders the survivors with a [`Comparator`] and slices the result into pages.
//! Entity types plug in by implementing [`Listing`], which describes which
//! fields are searchable and how each status or sort option maps to a rule.

use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;

pub mod comparator;
pub mod events;
pub mod filter;
pub mod paginator;
pub mod pipeline;
pub mod predicate;
pub mod requests;
pub mod services;
pub mod view;

pub use comparator::Comparator;
pub use filter::{FilterState, UnknownVariant};
pub use paginator::{PageState, Paginated, page_window};
pub use pipeline::run;
pub use predicate::Predicate;
pub use view::{EmptyState, ListSnapshot, ListView, LoadState};

/// Accessor for a free-text field used by search.
pub type TextField<T> = fn(&T) -> Option<&str>;
/// Accessor for a date field used by status checks and date sorting.
pub type DateField<T> = fn(&T) -> Option<NaiveDateTime>;
/// Accessor for the length of an associated collection, `None` when the API
/// omitted the collection.
pub type CountField<T> = fn(&T) -> Option<usize>;
/// Status check evaluated against a shared `now`.
pub type StatusCheck<T> = fn(&T, NaiveDateTime) -> bool;

/// Anything that can be shown in a list view.
pub trait ListItem {
    /// Identifier, unique within one fetched snapshot.
    fn id(&self) -> i64;
}

/// How a single status filter value constrains items.
pub enum StatusRule<T> {
    /// No constraint (`all`).
    Any,
    Check(StatusCheck<T>),
}

/// How a single sort key orders items. Missing values always sort last.
pub enum SortRule<T> {
    /// Descending by a date field.
    NewestFirst(DateField<T>),
    /// Ascending by a date field.
    OldestFirst(DateField<T>),
    /// Ascending by a text field, ignoring case and accents.
    ByName(TextField<T>),
    /// Descending by the size of an associated collection.
    MostFirst(CountField<T>),
}

/// Option set exposed to users as a dropdown (status filter or sort key).
pub trait ListOption: Copy + Eq + Default + Display + FromStr<Err = UnknownVariant> + 'static {
    /// Every value in display order.
    const ALL: &'static [Self];

    /// Name used in query strings and JSON.
    fn value(self) -> &'static str;

    /// Human readable label for templates.
    fn label(self) -> &'static str;
}

/// Per-entity configuration of the list engine.
pub trait Listing {
    type Item: ListItem + 'static;
    type Status: ListOption;
    type Sort: ListOption;

    /// Fields searched by free text, in order.
    fn searchable_fields() -> &'static [TextField<Self::Item>];

    fn status_rule(status: Self::Status) -> StatusRule<Self::Item>;

    fn sort_rule(sort: Self::Sort) -> SortRule<Self::Item>;
}
