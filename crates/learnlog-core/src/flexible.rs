//! Lenient deserializers for values the frontend sends in more than one shape.
//!
//! Select boxes post ids as strings (`"3"`) while edit forms post numbers, and
//! `created_at` is formatted client-side with an hour-only UTC offset
//! (`2025-04-01T09:30:00.000+09`) which strict RFC 3339 parsing rejects.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

/// Deserialize an optional integer id from a number, numeric string, empty string, or null.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IdRepr>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(IdRepr::Int(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("id out of range: {}", n))),
        Some(IdRepr::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid id: '{}'", s)))
        }
    }
}

/// Deserialize an optional timestamp, accepting RFC 3339 and hour-only offsets.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s).map(Some).map_err(de::Error::custom),
    }
}

/// Parse a timestamp string into UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%#z")
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            format!(
                "Invalid timestamp '{}': {}. Expected ISO 8601 (e.g., '2025-04-01T09:30:00Z')",
                s, e
            )
        })
}
