//! Timestamp type with an explicit invalid sentinel
//!
//! Persisted timestamps are RFC 3339 strings. A stored string that no longer
//! parses must not fail the whole load, so deserialization produces an
//! explicit `Invalid` value instead of an error. An invalid timestamp is
//! outside every date range and sorts after every valid instant when ordering
//! newest-first.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A point in time, or the remains of one that failed to parse
///
/// `Invalid` keeps the raw stored text so a corrupt record round-trips
/// unchanged instead of being silently rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Invalid(String),
}

impl Timestamp {
    /// The current instant
    pub fn now() -> Self {
        Self::Valid(Utc::now())
    }

    /// Parse an RFC 3339 string, falling back to the invalid sentinel
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Self::Valid(dt.with_timezone(&Utc)),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The underlying instant, if this timestamp is valid
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid(_) => None,
        }
    }

    /// Inclusive range check; always false for an invalid timestamp
    pub fn within(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> bool {
        let Some(dt) = self.as_datetime() else {
            return false;
        };
        if let Some(start) = start {
            if dt < start {
                return false;
            }
        }
        if let Some(end) = end {
            if dt > end {
                return false;
            }
        }
        true
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Valid(dt)
    }
}

/// Invalid sorts before every valid instant, so a descending
/// (newest-first) sort places corrupt records last.
impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Valid(a), Self::Valid(b)) => a.cmp(b),
            (Self::Valid(_), Self::Invalid(_)) => Ordering::Greater,
            (Self::Invalid(_), Self::Valid(_)) => Ordering::Less,
            (Self::Invalid(a), Self::Invalid(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Valid(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Calendar month window: `[first day 00:00:00.000, last day 23:59:59.999]`
/// in UTC, 1-based month. `None` when the year/month pair names no month.
pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single()?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_start = Utc.with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0).single()?;
    Some((start, next_start - Duration::milliseconds(1)))
}
