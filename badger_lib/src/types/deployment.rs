use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A recorded deploy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub environment: Option<String>,
    pub local_username: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: u64,
    pub repository: Option<String>,
    pub revision: Option<String>,
}
