use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;

/// An Insights dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Widget definitions, passed through as the server sends them.
    #[serde(deserialize_with = "null_as_default")]
    pub widgets: Vec<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub shared: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
}

/// Body for creating or updating a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub title: String,
    /// Default time range for the widgets (e.g. `"7d"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ts: Option<String>,
    #[serde(default)]
    pub widgets: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DashboardEnvelope<'a> {
    pub dashboard: &'a DashboardRequest,
}
