use std::num::NonZeroUsize;

use chrono::{NaiveDate, NaiveDateTime};
use eventdesk::domain::event::Event;
use eventdesk::listing::events::{EventListing, EventSort, EventStatus};
use eventdesk::listing::{
    FilterState, ListItem, ListOption, ListView, Listing, PageState, SortRule, StatusRule,
    TextField, pipeline,
};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn june_first() -> NaiveDateTime {
    at(2024, 6, 1)
}

fn event(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        ..Event::default()
    }
}

fn ids(items: &[&Event]) -> Vec<i64> {
    items.iter().map(|e| e.id).collect()
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            date: Some(at(2024, 5, 1)),
            duration: Some(at(2024, 5, 2)),
            participants: Some(vec![1, 2]),
            ..event(1, "Workshop A")
        },
        Event {
            date: Some(at(2024, 7, 1)),
            duration: Some(at(2024, 7, 2)),
            participants: Some(vec![1]),
            ..event(2, "seminar B")
        },
        Event {
            date: None,
            participants: Some(vec![1, 2]),
            ..event(3, "Network Day")
        },
        Event {
            date: Some(at(2024, 5, 1)),
            duration: Some(at(2024, 6, 5)),
            participants: None,
            ..event(4, "Gala")
        },
        Event {
            date: Some(at(2024, 7, 1)),
            participants: Some(vec![]),
            ..event(5, "workshop E")
        },
    ]
}

#[test]
fn seven_events_fill_two_pages_of_six() {
    let items: Vec<Event> = (1..=7).map(|id| event(id, &format!("E{id}"))).collect();
    let mut view = ListView::<EventListing>::new(NonZeroUsize::new(6).unwrap());
    view.load_with(|| Ok::<_, String>(items));

    assert_eq!(view.page_count(), 2);
    assert_eq!(view.visible().len(), 6);
    view.set_page(2);
    assert_eq!(view.visible().len(), 1);
}

#[test]
fn search_matches_any_searchable_field() {
    let items = vec![
        event(1, "Workshop A"),
        event(2, "Seminar B"),
        Event {
            description: Some("for workers".to_string()),
            ..event(3, "Network Day")
        },
    ];
    let filter = FilterState::new().search("work").sort(EventSort::Name);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    let mut names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Network Day", "Workshop A"]);
}

#[test]
fn empty_search_matches_everything() {
    let items = sample_events();
    let filter = FilterState::<EventStatus, EventSort>::new().search("   ");
    let result = pipeline::run::<EventListing>(&items, &filter, june_first());
    assert_eq!(result.len(), items.len());
}

#[test]
fn past_filter_uses_end_date() {
    let items = vec![
        Event {
            duration: Some(at(2024, 5, 1)),
            ..event(1, "Finished")
        },
        Event {
            duration: Some(at(2024, 7, 1)),
            ..event(2, "Still running")
        },
        event(3, "No end date"),
    ];
    let filter = FilterState::new().status(EventStatus::Past);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    assert_eq!(ids(&result), vec![1]);
}

#[test]
fn participants_sort_is_descending_and_stable() {
    let items = vec![
        Event {
            participants: Some(vec![1, 2]),
            ..event(1, "Two")
        },
        Event {
            participants: Some(vec![1, 2, 3, 4, 5]),
            ..event(2, "Five")
        },
        Event {
            participants: Some(vec![]),
            ..event(3, "Zero")
        },
        Event {
            participants: Some(vec![7, 8]),
            ..event(4, "Two again")
        },
        event(5, "Missing"),
    ];
    let filter = FilterState::new().sort(EventSort::Participants);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    assert_eq!(ids(&result), vec![2, 1, 4, 3, 5]);
}

#[test]
fn missing_participants_sort_after_empty_list() {
    let items = vec![
        event(1, "No list"),
        Event {
            participants: Some(vec![]),
            ..event(2, "Empty list")
        },
        Event {
            participants: Some(vec![9]),
            ..event(3, "One")
        },
    ];
    let filter = FilterState::new().sort(EventSort::Participants);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    assert_eq!(ids(&result), vec![3, 2, 1]);
}

#[test]
fn narrowing_filter_clamps_current_page() {
    let items: Vec<Event> = (1..=10)
        .map(|id| {
            let name = if id <= 3 { "Workshop" } else { "Seminar" };
            event(id, &format!("{name} {id}"))
        })
        .collect();
    let mut view = ListView::<EventListing>::new(NonZeroUsize::new(6).unwrap());
    view.load_with(|| Ok::<_, String>(items));
    view.set_page(2);
    assert_eq!(view.current_page(), 2);
    assert_eq!(view.page_count(), 2);

    view.set_search("workshop");

    assert_eq!(view.page_count(), 1);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.visible().len(), 3);
}

#[test]
fn failed_fetch_renders_error_state() {
    let mut view = ListView::<EventListing>::new(NonZeroUsize::new(6).unwrap());
    view.load_with(|| Err::<Vec<Event>, _>("network unreachable"));

    let snapshot = view.snapshot();
    assert_eq!(snapshot.state, "failed");
    assert_eq!(snapshot.error.as_deref(), Some("network unreachable"));
    assert!(snapshot.page.items.is_empty());
    assert!(view.visible().is_empty());
}

#[test]
fn pipeline_is_idempotent() {
    let items = sample_events();
    for &status in EventStatus::ALL {
        for &sort in EventSort::ALL {
            let filter = FilterState::new().search("o").status(status).sort(sort);
            let first = pipeline::run::<EventListing>(&items, &filter, june_first());
            let second = pipeline::run::<EventListing>(&items, &filter, june_first());
            assert_eq!(ids(&first), ids(&second));
        }
    }
}

#[test]
fn pipeline_leaves_input_untouched() {
    let items = sample_events();
    let before = items.clone();
    let filter = FilterState::new().sort(EventSort::Name);
    let _ = pipeline::run::<EventListing>(&items, &filter, june_first());
    assert_eq!(items, before);
}

#[test]
fn every_sort_key_is_stable() {
    // Pairs of events sharing every sort value; each pair must keep fetch order.
    let mut items = Vec::new();
    for (pair, name) in ["Alpha", "Beta", "Gamma"].iter().enumerate() {
        for copy in 0..2 {
            items.push(Event {
                id: (pair * 10 + copy) as i64,
                name: name.to_string(),
                date: Some(at(2024, 1, pair as u32 + 1)),
                participants: Some(vec![0; pair]),
                ..Event::default()
            });
        }
    }
    items.push(event(100, "Undated"));
    items.push(event(101, "Undated"));

    for &sort in EventSort::ALL {
        let filter = FilterState::new().sort(sort);
        let result = pipeline::run::<EventListing>(&items, &filter, june_first());
        for window in result.windows(2) {
            let (a, b) = (window[0], window[1]);
            if a.name == b.name {
                assert!(a.id < b.id, "{sort}: {} came before {}", a.id, b.id);
            }
        }
    }
}

#[test]
fn date_sorts_put_missing_dates_last() {
    let items = sample_events();
    for sort in [EventSort::Newest, EventSort::Oldest] {
        let filter = FilterState::new().sort(sort);
        let result = pipeline::run::<EventListing>(&items, &filter, june_first());
        assert_eq!(result.last().map(|e| e.id), Some(3), "{sort}");
    }

    let newest = pipeline::run::<EventListing>(
        &items,
        &FilterState::new().sort(EventSort::Newest),
        june_first(),
    );
    assert_eq!(ids(&newest), vec![2, 5, 1, 4, 3]);
}

#[test]
fn name_sort_ignores_case() {
    let items = sample_events();
    let filter = FilterState::new().sort(EventSort::Name);
    let result = pipeline::run::<EventListing>(&items, &filter, june_first());
    let names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Gala", "Network Day", "seminar B", "Workshop A", "workshop E"]
    );
}

#[test]
fn name_sort_places_accented_names_with_their_base_letter() {
    let items = vec![event(1, "Zoe"), event(2, "Émile"), event(3, "Adam"), event(4, "éva")];
    let filter = FilterState::new().sort(EventSort::Name);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    let names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Adam", "Émile", "éva", "Zoe"]);
}

#[test]
fn blank_names_sort_last() {
    let items = vec![event(1, ""), event(2, "Beta"), event(3, "  "), event(4, "alpha")];
    let filter = FilterState::new().sort(EventSort::Name);

    let result = pipeline::run::<EventListing>(&items, &filter, june_first());

    assert_eq!(ids(&result), vec![4, 2, 1, 3]);
}

#[test]
fn ongoing_and_upcoming_share_one_now() {
    let items = sample_events();
    let ongoing = pipeline::run::<EventListing>(
        &items,
        &FilterState::new().status(EventStatus::Ongoing),
        june_first(),
    );
    assert_eq!(ids(&ongoing), vec![4]);

    let upcoming = pipeline::run::<EventListing>(
        &items,
        &FilterState::new()
            .status(EventStatus::Upcoming)
            .sort(EventSort::Oldest),
        june_first(),
    );
    assert_eq!(ids(&upcoming), vec![2, 5]);
}

#[test]
fn pages_reconstruct_the_ordered_sequence() {
    for page_size in 1..=7 {
        for len in 0..=20 {
            let items: Vec<usize> = (0..len).collect();
            let mut state = PageState::new(NonZeroUsize::new(page_size).unwrap());
            let mut rebuilt = Vec::new();
            for page in 1..=state.page_count(len) {
                state.set_page(page as i64, len);
                rebuilt.extend_from_slice(state.slice(&items));
            }
            assert_eq!(rebuilt, items, "page_size={page_size} len={len}");
        }
    }
}

#[test]
fn out_of_range_pages_clamp_to_valid_content() {
    let items: Vec<Event> = (1..=13).map(|id| event(id, "E")).collect();
    let mut view = ListView::<EventListing>::new(NonZeroUsize::new(6).unwrap());
    view.load_with(|| Ok::<_, String>(items));

    for (requested, expected) in [(0, 1), (-5, 1), (3, 3), (4, 3), (1_000, 3)] {
        view.set_page(requested);
        assert_eq!(view.current_page(), expected, "requested {requested}");
        assert!(!view.visible().is_empty());
    }
}

// A listing that fails loudly if the comparator ever sees an excluded item.
#[derive(Clone, Debug)]
struct Tracked {
    id: i64,
    keep: bool,
    rank: usize,
}

impl ListItem for Tracked {
    fn id(&self) -> i64 {
        self.id
    }
}

struct TrackedListing;

fn tracked_rank(item: &Tracked) -> Option<usize> {
    assert!(item.keep, "item {} was sorted before filtering", item.id);
    Some(item.rank)
}

fn tracked_keep(item: &Tracked, _now: NaiveDateTime) -> bool {
    item.keep
}

const TRACKED_FIELDS: &[TextField<Tracked>] = &[];

impl Listing for TrackedListing {
    type Item = Tracked;
    type Status = EventStatus;
    type Sort = EventSort;

    fn searchable_fields() -> &'static [TextField<Tracked>] {
        TRACKED_FIELDS
    }

    fn status_rule(status: EventStatus) -> StatusRule<Tracked> {
        match status {
            EventStatus::All => StatusRule::Any,
            _ => StatusRule::Check(tracked_keep),
        }
    }

    fn sort_rule(_sort: EventSort) -> SortRule<Tracked> {
        SortRule::MostFirst(tracked_rank)
    }
}

#[test]
fn filter_runs_before_sort() {
    let items: Vec<Tracked> = (0..12)
        .map(|id| Tracked {
            id,
            keep: id % 3 != 0,
            rank: (id % 4) as usize,
        })
        .collect();
    let filter = FilterState::new().status(EventStatus::Past);

    let result = pipeline::run::<TrackedListing>(&items, &filter, june_first());

    let got: Vec<i64> = result.iter().map(|p| p.id()).collect();
    assert_eq!(got, vec![7, 11, 2, 10, 1, 5, 4, 8]);
}
