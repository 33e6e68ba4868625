//! Filter-then-sort composition over a fetched collection.

use chrono::NaiveDateTime;

use crate::listing::{Comparator, FilterState, Listing, Predicate};

/// Filters `items` with the current selection and sorts the survivors.
///
/// Filtering always precedes sorting. The input is left untouched; the output
/// borrows from it. The sort is stable, so ties keep their fetch order.
pub fn run<'a, L: Listing>(
    items: &'a [L::Item],
    filter: &FilterState<L::Status, L::Sort>,
    now: NaiveDateTime,
) -> Vec<&'a L::Item> {
    let predicate = Predicate::<L>::new(filter, now);
    let mut matched: Vec<&L::Item> = items.iter().filter(|item| predicate.matches(item)).collect();

    let comparator = Comparator::<L>::new(filter.sort);
    matched.sort_by(|a, b| comparator.compare(a, b));
    matched
}
