//! List filters and their query-string rendering.
//!
//! Unset filters are left out of the query string entirely; a filter struct
//! with nothing set produces no query string at all.

use url::form_urlencoded;

/// Implemented by the option structs accepted by list endpoints.
pub trait ListOptions {
    /// The set filters as `(key, value)` pairs, in declaration order.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Form-encoded query string without the leading `?`, or `None` when no
    /// filter is set.
    fn to_query_string(&self) -> Option<String> {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }

    /// Append the query string (if any) to `path`.
    fn apply_to(&self, path: &str) -> String {
        match self.to_query_string() {
            Some(query) => format!("{}?{}", path, query),
            None => path.to_string(),
        }
    }
}

/// Filters for `GET /projects/{id}/deploys`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentListOptions {
    pub environment: Option<String>,
    pub local_username: Option<String>,
    /// Unix seconds.
    pub created_after: Option<i64>,
    /// Unix seconds.
    pub created_before: Option<i64>,
    /// Max 25.
    pub limit: Option<u32>,
}

impl DeploymentListOptions {
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_local_username(mut self, local_username: impl Into<String>) -> Self {
        self.local_username = Some(local_username.into());
        self
    }

    pub fn with_created_after(mut self, unix_secs: i64) -> Self {
        self.created_after = Some(unix_secs);
        self
    }

    pub fn with_created_before(mut self, unix_secs: i64) -> Self {
        self.created_before = Some(unix_secs);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl ListOptions for DeploymentListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_str(&mut pairs, "environment", self.environment.as_deref());
        push_str(&mut pairs, "local_username", self.local_username.as_deref());
        push_positive(&mut pairs, "created_after", self.created_after);
        push_positive(&mut pairs, "created_before", self.created_before);
        push_positive(&mut pairs, "limit", self.limit.map(i64::from));
        pairs
    }
}

/// Time-window filters shared by the outage and uptime-check listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindowOptions {
    /// Unix seconds.
    pub created_after: Option<i64>,
    /// Unix seconds.
    pub created_before: Option<i64>,
    /// 1-25, server default 25.
    pub limit: Option<u32>,
}

impl TimeWindowOptions {
    pub fn with_created_after(mut self, unix_secs: i64) -> Self {
        self.created_after = Some(unix_secs);
        self
    }

    pub fn with_created_before(mut self, unix_secs: i64) -> Self {
        self.created_before = Some(unix_secs);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl ListOptions for TimeWindowOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_positive(&mut pairs, "created_after", self.created_after);
        push_positive(&mut pairs, "created_before", self.created_before);
        push_positive(&mut pairs, "limit", self.limit.map(i64::from));
        pairs
    }
}

/// Filters for `GET /projects/{id}/sites/{id}/outages`.
pub type OutageListOptions = TimeWindowOptions;

/// Filters for `GET /projects/{id}/sites/{id}/uptime_checks`.
pub type UptimeCheckListOptions = TimeWindowOptions;

fn push_str(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, v.to_string()));
    }
}

fn push_positive(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<i64>) {
    if let Some(v) = value.filter(|v| *v > 0) {
        pairs.push((key, v.to_string()));
    }
}
