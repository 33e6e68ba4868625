//! List configuration for the admin events view.
//!
//! Status checks compare full timestamps against `now`. An event whose
//! relevant date is missing or unparseable matches no status other than `all`.

use chrono::NaiveDateTime;

use crate::domain::event::Event;
use crate::listing::filter::list_option;
use crate::listing::{ListItem, Listing, SortRule, StatusRule, TextField};

list_option!(
    /// Status filter of the events list.
    EventStatus {
        All => ("all", "All events"),
        Upcoming => ("upcoming", "Upcoming"),
        Ongoing => ("ongoing", "Ongoing"),
        Past => ("past", "Past"),
        RegistrationOpen => ("registration-open", "Registration open"),
        RegistrationClosed => ("registration-closed", "Registration closed"),
    }
);

list_option!(
    /// Sort key of the events list.
    EventSort {
        Newest => ("newest", "Newest first"),
        Oldest => ("oldest", "Oldest first"),
        Name => ("name", "Name"),
        Participants => ("participants", "Most participants"),
    }
);

impl ListItem for Event {
    fn id(&self) -> i64 {
        self.id
    }
}

fn name(event: &Event) -> Option<&str> {
    Some(event.name.as_str()).filter(|name| !name.trim().is_empty())
}

fn description(event: &Event) -> Option<&str> {
    event.description.as_deref()
}

fn location(event: &Event) -> Option<&str> {
    event.location.as_deref()
}

fn start(event: &Event) -> Option<NaiveDateTime> {
    event.date
}

fn participants(event: &Event) -> Option<usize> {
    event.participant_count()
}

const SEARCHABLE: &[TextField<Event>] = &[name, description, location];

pub fn is_upcoming(event: &Event, now: NaiveDateTime) -> bool {
    event.date.is_some_and(|start| now < start)
}

pub fn is_ongoing(event: &Event, now: NaiveDateTime) -> bool {
    match (event.date, event.duration) {
        (Some(start), Some(end)) => start <= now && now <= end,
        _ => false,
    }
}

pub fn is_past(event: &Event, now: NaiveDateTime) -> bool {
    event.duration.is_some_and(|end| end < now)
}

pub fn is_registration_open(event: &Event, now: NaiveDateTime) -> bool {
    event.reg_end_date.is_some_and(|deadline| now <= deadline)
}

pub fn is_registration_closed(event: &Event, now: NaiveDateTime) -> bool {
    event.reg_end_date.is_some_and(|deadline| deadline < now)
}

/// Events list view.
pub struct EventListing;

impl Listing for EventListing {
    type Item = Event;
    type Status = EventStatus;
    type Sort = EventSort;

    fn searchable_fields() -> &'static [TextField<Event>] {
        SEARCHABLE
    }

    fn status_rule(status: EventStatus) -> StatusRule<Event> {
        match status {
            EventStatus::All => StatusRule::Any,
            EventStatus::Upcoming => StatusRule::Check(is_upcoming),
            EventStatus::Ongoing => StatusRule::Check(is_ongoing),
            EventStatus::Past => StatusRule::Check(is_past),
            EventStatus::RegistrationOpen => StatusRule::Check(is_registration_open),
            EventStatus::RegistrationClosed => StatusRule::Check(is_registration_closed),
        }
    }

    fn sort_rule(sort: EventSort) -> SortRule<Event> {
        match sort {
            EventSort::Newest => SortRule::NewestFirst(start),
            EventSort::Oldest => SortRule::OldestFirst(start),
            EventSort::Name => SortRule::ByName(name),
            EventSort::Participants => SortRule::MostFirst(participants),
        }
    }
}
