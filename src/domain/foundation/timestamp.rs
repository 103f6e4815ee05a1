//! UTC instants.
//!
//! Serialized as RFC 3339. Deserialization also takes epoch milliseconds,
//! which is what a browser's `Date.now()` posts.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns `None` outside chrono's representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns `None` outside chrono's representable range.
    pub fn from_unix_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Later instant, saturating at the end of the representable range.
    pub fn plus_secs(&self, secs: u64) -> Self {
        let secs = i64::try_from(secs).unwrap_or(i64::MAX);
        Duration::try_seconds(secs)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
            .unwrap_or(Self(DateTime::<Utc>::MAX_UTC))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(DateTime<Utc>),
    Millis(i64),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match WireTimestamp::deserialize(deserializer)? {
            WireTimestamp::Text(dt) => Ok(Self(dt)),
            WireTimestamp::Millis(ms) => Self::from_unix_millis(ms)
                .ok_or_else(|| serde::de::Error::custom("timestamp out of range")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn from_unix_secs_round_trips_calendar_date() {
        // 2024-01-15T00:00:00Z
        let ts = Timestamp::from_unix_secs(1705276800).unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn out_of_range_values_are_none() {
        assert!(Timestamp::from_unix_secs(i64::MAX).is_none());
        assert!(Timestamp::from_unix_millis(i64::MAX).is_none());
    }

    #[test]
    fn plus_secs_adds() {
        let ts = Timestamp::from_unix_secs(1000).unwrap().plus_secs(3600);
        assert_eq!(ts.as_unix_secs(), 4600);
    }

    #[test]
    fn plus_secs_saturates() {
        let ts = Timestamp::now().plus_secs(u64::MAX);
        assert_eq!(*ts.as_datetime(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn deserializes_rfc3339_text() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00.000Z\"").unwrap();
        assert_eq!(ts.as_unix_secs(), 1705314600);
    }

    #[test]
    fn deserializes_epoch_millis() {
        let ts: Timestamp = serde_json::from_str("1705314600000").unwrap();
        assert_eq!(ts.as_unix_secs(), 1705314600);
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = Timestamp::from_unix_secs(1705276800).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15T00:00:00"));
    }
}
