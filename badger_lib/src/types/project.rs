//! Projects, faults, and notices: the records the other resources hang off.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, Number, Site, Team};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub earliest_notice_at: Option<DateTime<Utc>>,
    pub last_notice_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub environments: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fault_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unresolved_fault_count: u64,
    /// The project API key notifiers report with.
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sites: Vec<Site>,
    #[serde(deserialize_with = "null_as_default")]
    pub teams: Vec<Team>,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

/// A grouped error class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fault {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    pub action: Option<String>,
    pub assignee: Option<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub comments_count: u64,
    pub component: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ignored: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub klass: String,
    pub last_notice_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notices_count: u64,
    /// Present when a search query narrowed the notice count.
    pub notices_count_in_range: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub resolved: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// One occurrence of a fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notice {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment: NoticeEnvironment,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_name: String,
    pub cookies: Option<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_default")]
    pub fault_id: u64,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub web_environment: Option<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_default")]
    pub request: NoticeRequest,
    #[serde(deserialize_with = "null_as_default")]
    pub backtrace: Vec<BacktraceEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub application_trace: Vec<BacktraceEntry>,
    pub deploy: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeEnvironment {
    pub environment_name: Option<String>,
    pub hostname: Option<String>,
    /// A path string or a `{"path": ...}` object depending on the notifier.
    pub project_root: Option<Value>,
    pub revision: Option<String>,
    pub stats: Option<Map<String, Value>>,
    pub time: Option<String>,
    pub pid: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeRequest {
    pub action: Option<String>,
    pub component: Option<String>,
    pub context: Option<Map<String, Value>>,
    pub params: Option<Map<String, Value>>,
    pub session: Option<Map<String, Value>>,
    pub url: Option<String>,
    pub user: Option<Map<String, Value>>,
}

/// A backtrace frame. Line and column come through [`Number`] because
/// notifiers send them as either integers or strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BacktraceEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub number: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<Number>,
    #[serde(deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub frame_type: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Map<String, Value>>,
    /// `app`, `all`, or a notifier-specific label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}
