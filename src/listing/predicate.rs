//! Builds the boolean filter applied to every fetched item.

use chrono::NaiveDateTime;

use crate::listing::{FilterState, Listing, StatusRule, TextField};

/// Compiled form of a [`FilterState`] for one pipeline run.
///
/// The search needle is normalised once and `now` is fixed at construction so
/// every item is judged against the same instant.
pub struct Predicate<L: Listing> {
    needle: Option<String>,
    fields: &'static [TextField<L::Item>],
    status: StatusRule<L::Item>,
    now: NaiveDateTime,
}

impl<L: Listing> Predicate<L> {
    pub fn new(filter: &FilterState<L::Status, L::Sort>, now: NaiveDateTime) -> Self {
        let needle = filter.search.trim().to_lowercase();
        Self {
            needle: (!needle.is_empty()).then_some(needle),
            fields: L::searchable_fields(),
            status: L::status_rule(filter.status),
            now,
        }
    }

    pub fn matches(&self, item: &L::Item) -> bool {
        self.matches_search(item) && self.matches_status(item)
    }

    fn matches_search(&self, item: &L::Item) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        self.fields.iter().any(|field| {
            field(item).is_some_and(|value| value.to_lowercase().contains(needle.as_str()))
        })
    }

    fn matches_status(&self, item: &L::Item) -> bool {
        match self.status {
            StatusRule::Any => true,
            StatusRule::Check(check) => check(item, self.now),
        }
    }
}
