use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, FlexibleId};

/// A status page aggregating uptime sites and check-ins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPage {
    #[serde(deserialize_with = "null_as_default")]
    pub id: FlexibleId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id: FlexibleId,
    pub domain: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub domain_verified_at: Option<DateTime<Utc>>,
    /// Site IDs shown on the page.
    #[serde(deserialize_with = "null_as_default")]
    pub sites: Vec<String>,
    /// Check-in slugs shown on the page.
    #[serde(deserialize_with = "null_as_default")]
    pub check_ins: Vec<String>,
    pub hide_branding: Option<bool>,
    pub features: Option<Map<String, Value>>,
}

/// Fields for creating or updating a status page. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusPageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sites: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub check_ins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_branding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusPageRequest<'a> {
    pub status_page: &'a StatusPageParams,
}
