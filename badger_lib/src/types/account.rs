use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, FlexibleId};

/// A Honeybadger account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub id: FlexibleId,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub active: Option<bool>,
    pub parked: Option<bool>,
    /// Percentage of the plan quota used this period.
    pub quota_consumed: Option<f64>,
    pub api_stats: Option<Map<String, Value>>,
}

/// A user's membership in an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Member, Billing, Admin, or Owner.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AccountUserUpdateRequest<'a> {
    pub user: RoleParams<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RoleParams<'a> {
    pub role: &'a str,
}

/// A pending or accepted invitation to join an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInvitation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_ids: Vec<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub accepted_at: Option<DateTime<Utc>>,
}

/// Fields for creating or updating an account invitation. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInvitationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AccountInvitationRequest<'a> {
    pub invitation: &'a AccountInvitationParams,
}
