//! Builds the ordering used to sort filtered items.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::listing::{Listing, SortRule};

/// Ordering for one sort key.
///
/// Items lacking the sort value go after every item that has it, regardless of
/// direction. Equal items compare as [`Ordering::Equal`] so a stable sort keeps
/// their fetch order.
pub struct Comparator<L: Listing> {
    rule: SortRule<L::Item>,
}

impl<L: Listing> Comparator<L> {
    pub fn new(sort: L::Sort) -> Self {
        Self {
            rule: L::sort_rule(sort),
        }
    }

    pub fn compare(&self, a: &L::Item, b: &L::Item) -> Ordering {
        match self.rule {
            SortRule::NewestFirst(field) => missing_last(field(a), field(b), |x, y| y.cmp(x)),
            SortRule::OldestFirst(field) => missing_last(field(a), field(b), |x, y| x.cmp(y)),
            SortRule::ByName(field) => missing_last(field(a), field(b), compare_names),
            SortRule::MostFirst(field) => missing_last(field(a), field(b), |x, y| y.cmp(x)),
        }
    }
}

fn missing_last<V>(a: Option<V>, b: Option<V>, cmp: impl Fn(&V, &V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Collation key for names: accents stripped, then case-folded.
fn name_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Accent- and case-insensitive comparison with the raw text as tie breaker.
///
/// "Émile" sorts between "Adam" and "Zoe"; "emile" and "Émile" fall back to
/// the raw text so the order is total.
fn compare_names(a: &&str, b: &&str) -> Ordering {
    let a_trimmed = a.trim();
    let b_trimmed = b.trim();
    name_key(a_trimmed)
        .cmp(&name_key(b_trimmed))
        .then_with(|| a_trimmed.cmp(b_trimmed))
}
