//! 时间类型模块
//!
//! `Timestamp` keeps the API's creation timestamp exactly as received and
//! formats it for display on demand.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for ticket timestamps (dd/mm/yyyy hh:mm:ss).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Naive layouts some backends emit without an offset.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Raw creation timestamp of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses RFC 3339 first (converted to local time), then the naive
    /// layouts (taken as already local).
    pub fn parse(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }

    /// Human readable form; unparseable input is shown verbatim.
    pub fn formatted(&self) -> String {
        match self.parse() {
            Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_timestamp_is_formatted_as_is() {
        let ts = Timestamp::from("2024-05-10 08:30:00");
        assert_eq!(ts.formatted(), "10/05/2024 08:30:00");

        let ts = Timestamp::from("2024-05-10T08:30:00.123");
        assert_eq!(ts.formatted(), "10/05/2024 08:30:00");
    }

    #[test]
    fn rfc3339_timestamp_is_parsed() {
        let ts = Timestamp::from("2024-05-10T12:00:00Z");
        assert!(ts.parse().is_some());
        assert!(ts.formatted().contains("/2024"));
    }

    #[test]
    fn garbage_falls_back_to_raw() {
        let ts = Timestamp::from("ontem");
        assert_eq!(ts.parse(), None);
        assert_eq!(ts.to_string(), "ontem");
    }
}
