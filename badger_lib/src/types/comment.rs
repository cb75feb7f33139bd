use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, User};

/// A comment (or system event) on a fault's timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub fault_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub event: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notices_count: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub author: Option<User>,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommentRequest<'a> {
    pub comment: CommentBody<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommentBody<'a> {
    pub body: &'a str,
}
