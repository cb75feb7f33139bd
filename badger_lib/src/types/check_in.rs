use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, FlexibleId};

/// A scheduled heartbeat monitor.
///
/// `simple` check-ins expect a report every `report_period`; `cron` check-ins
/// follow `cron_schedule` in `cron_timezone` (UTC when unset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckIn {
    #[serde(deserialize_with = "null_as_default")]
    pub id: FlexibleId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schedule_type: String,
    pub report_period: Option<String>,
    pub grace_period: Option<String>,
    pub cron_schedule: Option<String>,
    pub cron_timezone: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub last_check_in_at: Option<DateTime<Utc>>,
}

/// Fields for creating or updating a check-in. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_timezone: Option<String>,
}

impl CheckInParams {
    /// A `simple` check-in expected every `report_period` (e.g. `"1 day"`).
    pub fn simple(name: impl Into<String>, report_period: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            schedule_type: Some("simple".to_string()),
            report_period: Some(report_period.into()),
            ..Self::default()
        }
    }

    /// A `cron` check-in following `cron_schedule` (e.g. `"0 * * * *"`).
    pub fn cron(name: impl Into<String>, cron_schedule: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            schedule_type: Some("cron".to_string()),
            cron_schedule: Some(cron_schedule.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckInRequest<'a> {
    pub check_in: &'a CheckInParams,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckInBulkRequest<'a> {
    pub check_ins: &'a [CheckInParams],
}

/// Outcome of a bulk check-in replacement, grouped by what happened to each entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInBulkUpdateResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub create: Vec<CheckInBulkResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub update: Vec<CheckInBulkResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub delete: Vec<CheckInBulkResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckInBulkResult {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    pub id: Option<FlexibleId>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    pub error: Option<String>,
}
