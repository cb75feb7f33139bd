use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// An uptime-monitored URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    /// Minutes between checks.
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: u32,
    pub last_checked_at: Option<DateTime<Utc>>,
    #[serde(rename = "match")]
    pub match_value: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub match_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Fields for creating or updating a site. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 1, 5, or 15 minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Status code or text pattern, interpreted per `match_type`.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_value: Option<String>,
    /// `success`, `exact`, `include`, or `exclude`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_headers: Vec<RequestHeader>,
    /// Virginia, Oregon, Frankfurt, Singapore, London.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_ssl: Option<bool>,
    /// Seconds; plan dependent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Consecutive failed checks before an outage is reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outage_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SiteRequest<'a> {
    pub site: &'a SiteParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outage {
    pub down_at: Option<DateTime<Utc>>,
    /// `None` while the outage is ongoing.
    pub up_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// HTTP status observed by the failing check.
    pub status: Option<u16>,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    pub headers: Option<Map<String, Value>>,
}

impl Outage {
    pub fn is_ongoing(&self) -> bool {
        self.up_at.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UptimeCheck {
    pub created_at: Option<DateTime<Utc>>,
    /// Milliseconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub up: bool,
}
