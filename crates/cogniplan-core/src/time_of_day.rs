//! `HH:MM` rendering for clock times.
//!
//! Schedules are written and reported at minute resolution, so seconds are
//! neither accepted nor emitted.

use jiff::civil::Time;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::CoreError;

/// Parse an `HH:MM` string into a civil time.
pub fn parse(s: &str) -> Result<Time, CoreError> {
    let invalid = || CoreError::InvalidTimeOfDay(s.to_string());

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(invalid());
    }
    let hour: i8 = hours.parse().map_err(|_| invalid())?;
    let minute: i8 = minutes.parse().map_err(|_| invalid())?;
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

/// Render a civil time as `HH:MM`.
pub fn format(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Serde adapter: `#[serde(with = "cogniplan_core::time_of_day")]`.
pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*time))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
