use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{lenient_amount, lenient_datetime, lenient_ids, lenient_name, lenient_text};

/// Service offered on the platform, as returned by `GET /services`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Service {
    pub id: i64,
    #[serde(default, alias = "title", deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub pricing_plans: Option<Vec<PricingPlan>>,
    #[serde(default)]
    pub availability: Option<Vec<AvailabilitySlot>>,
    /// Identifiers of service requests filed against this service.
    #[serde(default, deserialize_with = "lenient_ids")]
    pub requests: Option<Vec<i64>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PricingPlan {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Price in `currency`; `None` when the API sent something unreadable.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

/// Window during which the service can be booked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AvailabilitySlot {
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub end: Option<NaiveDateTime>,
}

impl Service {
    /// Number of filed requests, `None` when the API omits the list.
    pub fn request_count(&self) -> Option<usize> {
        self.requests.as_ref().map(Vec::len)
    }

    /// Returns true when at least one slot has a known end at or after `now`.
    pub fn has_open_slot(&self, now: NaiveDateTime) -> bool {
        self.availability
            .iter()
            .flatten()
            .any(|slot| slot.end.is_some_and(|end| end >= now))
    }

    /// Returns true when the service has known slots and all of them ended before `now`.
    pub fn has_only_closed_slots(&self, now: NaiveDateTime) -> bool {
        let slots = self.availability.as_deref().unwrap_or_default();
        !slots.is_empty() && slots.iter().all(|slot| slot.end.is_some_and(|end| end < now))
    }
}
