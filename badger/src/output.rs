//! Rendering of API responses: aligned plain-text tables or pretty JSON.

use std::fmt::Write;

use badger_lib::format_timestamp_display;
use serde_json::{Map, Value};

const MAX_CELL_WIDTH: usize = 40;
const MAX_COLUMNS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" | "p" => Ok(OutputFormat::Plain),
            "json" | "j" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub format: OutputFormat,
    /// Show timestamps in UTC instead of the local zone (plain output only).
    pub use_utc: bool,
}

impl Renderer {
    pub fn render(&self, value: &Value) -> Result<String, serde_json::Error> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value),
            OutputFormat::Plain => Ok(self.plain(value)),
        }
    }

    fn plain(&self, value: &Value) -> String {
        let mut out = String::new();
        match value {
            // list envelope: table of results plus the next-page hint
            Value::Object(map) if map.get("results").is_some_and(Value::is_array) => {
                self.write_value(map.get("results").unwrap_or(&Value::Null), &mut out, 0);
                if let Some(next) = map
                    .get("links")
                    .and_then(|l| l.get("next"))
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                {
                    let _ = writeln!(out, "\nnext page: {}", next);
                }
            }
            other => self.write_value(other, &mut out, 0),
        }
        out
    }

    fn write_value(&self, value: &Value, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Array(items) if items.is_empty() => {
                let _ = writeln!(out, "{}<empty>", pad);
            }
            Value::Array(items) if items.iter().all(Value::is_object) => {
                self.write_table(items, out, &pad);
            }
            Value::Array(items) => {
                for item in items {
                    if item.is_object() || item.is_array() {
                        let _ = writeln!(out, "{}-", pad);
                        self.write_value(item, out, indent + 1);
                    } else {
                        let _ = writeln!(out, "{}- {}", pad, self.cell(None, item));
                    }
                }
            }
            Value::Object(map) => self.write_object(map, out, indent),
            scalar => {
                let _ = writeln!(out, "{}{}", pad, self.cell(None, scalar));
            }
        }
    }

    fn write_object(&self, map: &Map<String, Value>, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        for (key, val) in map {
            match val {
                Value::Object(inner) if inner.is_empty() => {}
                Value::Object(_) | Value::Array(_) => {
                    let _ = writeln!(out, "{}{}:", pad, key);
                    self.write_value(val, out, indent + 1);
                }
                scalar => {
                    let shown = self.cell(Some(key.as_str()), scalar);
                    let _ = writeln!(out, "{}{}: {}", pad, key, shown);
                }
            }
        }
    }

    /// One row per object; columns are the scalar keys of the first object.
    fn write_table(&self, rows: &[Value], out: &mut String, pad: &str) {
        let columns: Vec<&String> = rows
            .first()
            .and_then(Value::as_object)
            .map(|first| {
                first
                    .iter()
                    .filter(|(_, v)| !v.is_object() && !v.is_array())
                    .map(|(k, _)| k)
                    .take(MAX_COLUMNS)
                    .collect()
            })
            .unwrap_or_default();

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|key| {
                        let cell = row
                            .get(key.as_str())
                            .map(|v| self.cell(Some(key.as_str()), v))
                            .unwrap_or_else(|| "-".to_string());
                        truncate(&cell, MAX_CELL_WIDTH)
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, key)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(key.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(key, w)| format!("{:<w$}", key, w = *w))
            .collect();
        let header = header.join("  ");
        let _ = writeln!(out, "{}{}", pad, header.trim_end());
        let _ = writeln!(out, "{}{}", pad, "-".repeat(header.trim_end().chars().count()));
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                .collect();
            let _ = writeln!(out, "{}{}", pad, line.join("  ").trim_end());
        }
    }

    /// Scalar as display text; `*_at` timestamps are shown in the chosen zone.
    fn cell(&self, key: Option<&str>, value: &Value) -> String {
        match value {
            Value::Null => "-".to_string(),
            Value::String(s) => {
                if key.is_some_and(|k| k.ends_with("_at")) {
                    if let Some(shown) = format_timestamp_display(s, self.use_utc) {
                        return shown;
                    }
                }
                s.replace('\n', " ")
            }
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() -> Renderer {
        Renderer {
            format: OutputFormat::Plain,
            use_utc: true,
        }
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("j".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn list_envelope_renders_table_and_next_link() {
        let v = json!({
            "results": [
                {"id": 1, "name": "Nightly backup", "tags": ["a"]},
                {"id": 22, "name": "Hourly", "tags": []}
            ],
            "links": {"self": "x", "next": "https://app.honeybadger.io/v2/p?page=2"}
        });
        let out = plain().render(&v).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id  name");
        assert_eq!(lines[2], "1   Nightly backup");
        assert_eq!(lines[3], "22  Hourly");
        assert!(out.contains("next page: https://app.honeybadger.io/v2/p?page=2"));
        // nested values are not table columns
        assert!(!lines[0].contains("tags"));
    }

    #[test]
    fn timestamps_shown_in_utc() {
        let v = json!({"name": "prod", "created_at": "2024-05-20T14:02:11Z"});
        let out = plain().render(&v).unwrap();
        assert!(out.contains("created_at: 2024-05-20 14:02:11 UTC"));
        assert!(out.contains("name: prod"));
    }

    #[test]
    fn empty_list() {
        let out = plain().render(&json!({"results": [], "links": {}})).unwrap();
        assert_eq!(out.trim(), "<empty>");
    }

    #[test]
    fn long_cells_truncated() {
        let long = "x".repeat(100);
        let out = plain().render(&json!([{"body": long}])).unwrap();
        let row = out.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), MAX_CELL_WIDTH);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn json_is_pretty() {
        let r = Renderer {
            format: OutputFormat::Json,
            use_utc: false,
        };
        let v = json!({"x": 1, "y": [2, 3]});
        let s = r.render(&v).unwrap();
        assert!(s.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&s).unwrap(), v);
    }
}
