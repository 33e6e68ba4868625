use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{lenient_datetime, lenient_ids, lenient_name, lenient_text};

/// Event as returned by `GET /events`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Event {
    pub id: i64,
    #[serde(default, alias = "title", deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    /// Start of the event.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub date: Option<NaiveDateTime>,
    /// End of the event. The API calls this field `duration`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub duration: Option<NaiveDateTime>,
    /// Last moment registration is accepted.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub reg_end_date: Option<NaiveDateTime>,
    /// Identifiers of registered users.
    #[serde(default, deserialize_with = "lenient_ids")]
    pub participants: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

impl Event {
    /// Number of registered participants, `None` when the API omits the list.
    pub fn participant_count(&self) -> Option<usize> {
        self.participants.as_ref().map(Vec::len)
    }
}
