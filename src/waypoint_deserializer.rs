use crate::domain::{LatLng, Waypoint};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeDelta, TimeZone};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Waypoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            timestamp: String,
        }

        let inner = Inner::deserialize(deserializer)?;
        if !(inner.latitude >= -90.0 && inner.latitude <= 90.0) {
            return Err(Error::custom(format!("invalid waypoint latitude: {}, must be between -90 and 90", inner.latitude)));
        }

        if !(inner.longitude >= -180.0 && inner.longitude <= 180.0) {
            return Err(Error::custom(format!("invalid waypoint longitude: {}, must be between -180 and 180", inner.longitude)));
        }

        let timestamp = parse_timestamp(&inner.timestamp, &Local).map_err(Error::custom)?;

        Ok(Waypoint::new(LatLng::new(inner.latitude, inner.longitude), timestamp))
    }
}

/// Parses an RFC 3339 timestamp. A date time without an offset is wall clock time in `tz`.
fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp);
    }

    let invalid = || format!("invalid waypoint timestamp: '{}', expected an ISO-8601 date time", value);
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| invalid())?;

    // Ambiguous times take the earlier offset, times skipped by a DST gap move an hour forward
    naive
        .and_local_timezone(tz.clone())
        .earliest()
        .or_else(|| (naive + TimeDelta::hours(1)).and_local_timezone(tz.clone()).earliest())
        .map(|timestamp| timestamp.fixed_offset())
        .ok_or_else(invalid)
}
