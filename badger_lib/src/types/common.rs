//! Shared wire types: the pagination envelope and lenient scalar decoders.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Integer that decodes from a JSON number or a JSON numeric string.
///
/// Notifier SDKs disagree on how they report backtrace line and column
/// numbers, so the API echoes back whichever form it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Number(pub i64);

impl Number {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number(n)
    }
}

impl From<Number> for i64 {
    fn from(n: Number) -> Self {
        n.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        match &raw {
            Value::Number(n) => n.as_i64().map(Number).ok_or_else(|| {
                de::Error::custom(format!("Number: cannot represent {} as an integer", n))
            }),
            Value::String(s) => s.parse::<i64>().map(Number).map_err(|e| {
                de::Error::custom(format!(
                    "Number: cannot parse string {:?} as integer: {}",
                    s, e
                ))
            }),
            other => Err(de::Error::custom(format!(
                "Number: cannot unmarshal {} into an integer",
                other
            ))),
        }
    }
}

/// Identifier that the API sends as either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct FlexibleId(pub String);

impl FlexibleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlexibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlexibleId {
    fn from(s: &str) -> Self {
        FlexibleId(s.to_string())
    }
}

impl From<String> for FlexibleId {
    fn from(s: String) -> Self {
        FlexibleId(s)
    }
}

impl PartialEq<str> for FlexibleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FlexibleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for FlexibleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(FlexibleId(s)),
            Value::Number(n) => Ok(FlexibleId(n.to_string())),
            other => Err(de::Error::custom(format!(
                "expected a string or integer id, got {}",
                other
            ))),
        }
    }
}

/// Pagination links. Absent links are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(rename = "self", default, deserialize_with = "null_as_default")]
    pub self_link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prev: String,
}

/// List envelope: `{"results": [...], "links": {"self", "next", "prev"}}`.
///
/// `results` keeps server order and is never absent: a missing or null key
/// decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub results: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: PaginationLinks,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            links: PaginationLinks::default(),
        }
    }
}

impl<T> ListResponse<T> {
    /// False on the last page.
    pub fn has_next_page(&self) -> bool {
        !self.links.next.is_empty()
    }

    pub fn next_page_url(&self) -> Option<&str> {
        Some(self.links.next.as_str()).filter(|s| !s.is_empty())
    }

    pub fn prev_page_url(&self) -> Option<&str> {
        Some(self.links.prev.as_str()).filter(|s| !s.is_empty())
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Acknowledgement for updates that answer 204 No Content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub success: bool,
    pub message: String,
}

/// Acknowledgement for deletes that answer 204 No Content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub success: bool,
    pub message: String,
}

/// Treat an explicit JSON `null` like an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_accepts_integer_and_numeric_string() {
        let a: Number = serde_json::from_str("42").unwrap();
        let b: Number = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(a, Number(42));
        assert_eq!(a, b);

        let neg: Number = serde_json::from_str(r#""-7""#).unwrap();
        assert_eq!(neg.get(), -7);
    }

    #[test]
    fn number_rejects_other_shapes() {
        for raw in [r#""abc""#, "{}", "[]", "true", "null", "4.5", r#"" 42""#] {
            let res = serde_json::from_str::<Number>(raw);
            assert!(res.is_err(), "{} should not decode", raw);
        }
        let err = serde_json::from_str::<Number>(r#""abc""#).unwrap_err();
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn number_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Number(12)).unwrap(), "12");
    }

    #[test]
    fn flexible_id_accepts_string_or_integer() {
        let a: FlexibleId = serde_json::from_str("1").unwrap();
        let b: FlexibleId = serde_json::from_str(r#""abc123""#).unwrap();
        assert_eq!(a, "1");
        assert_eq!(b.as_str(), "abc123");
        assert!(serde_json::from_str::<FlexibleId>("{}").is_err());
    }

    #[test]
    fn empty_results_decode_as_empty_list() {
        let resp: ListResponse<u32> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.links, PaginationLinks::default());
        assert_eq!(resp.links.self_link, "");
        assert!(!resp.has_next_page());
    }

    #[test]
    fn missing_or_null_results_decode_as_empty_list() {
        let missing: ListResponse<u32> = serde_json::from_str("{}").unwrap();
        assert!(missing.results.is_empty());

        let null: ListResponse<u32> =
            serde_json::from_str(r#"{"results": null, "links": null}"#).unwrap();
        assert!(null.results.is_empty());
        assert_eq!(null.links.next, "");
    }

    #[test]
    fn links_and_order_are_kept() {
        let json = r#"{
            "results": [3, 1, 2],
            "links": {
                "self": "https://app.honeybadger.io/v2/projects/1/deploys",
                "next": "https://app.honeybadger.io/v2/projects/1/deploys?page=2",
                "prev": null
            }
        }"#;
        let resp: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results, vec![3, 1, 2]);
        assert!(resp.has_next_page());
        assert_eq!(
            resp.next_page_url(),
            Some("https://app.honeybadger.io/v2/projects/1/deploys?page=2")
        );
        assert_eq!(resp.prev_page_url(), None);
    }
}
