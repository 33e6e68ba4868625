use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::types::{lenient_datetime, lenient_id, lenient_text};

/// Request filed by a user against a service, as returned by `GET /service-requests`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ServiceRequest {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_id")]
    pub service_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub service_name: Option<String>,
    #[serde(default, alias = "name", deserialize_with = "lenient_text")]
    pub requester_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: RequestStatus,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

/// Workflow state of a service request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    /// Anything the API sends that is not one of the known states.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "PENDING"),
            RequestStatus::InProgress => write!(f, "IN_PROGRESS"),
            RequestStatus::Completed => write!(f, "COMPLETED"),
            RequestStatus::Cancelled => write!(f, "CANCELLED"),
            RequestStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Reads any status value, falling back to [`RequestStatus::Unknown`] for nulls or
/// non-string payloads.
fn lenient_status<'de, D>(deserializer: D) -> Result<RequestStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_does_not_fail_payload() {
        let request: ServiceRequest =
            serde_json::from_str(r#"{"id": 3, "status": "ARCHIVED"}"#).unwrap();
        assert_eq!(request.status, RequestStatus::Unknown);

        let request: ServiceRequest =
            serde_json::from_str(r#"{"id": 4, "status": "IN_PROGRESS"}"#).unwrap();
        assert_eq!(request.status, RequestStatus::InProgress);

        let request: ServiceRequest =
            serde_json::from_str(r#"{"id": 5, "status": null}"#).unwrap();
        assert_eq!(request.status, RequestStatus::Unknown);
    }
}
