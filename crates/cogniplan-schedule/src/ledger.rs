use std::collections::BTreeMap;

use cogniplan_core::models::weekday::Weekday;
use cogniplan_core::time_of_day;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

/// One committed appointment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub date: Date,
    pub day: Weekday,
    #[serde(with = "time_of_day")]
    pub time: Time,
    /// Free-form tag supplied by the caller, usually a dementia level label.
    #[serde(rename = "dementia_level")]
    pub priority: String,
}

/// Bookings grouped by weekday label, regardless of calendar date.
///
/// Append-only: a Monday booking made this week and one made next week both
/// count against "Monday" for as long as the ledger lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingLedger {
    bookings: BTreeMap<Weekday, Vec<Booking>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings(&self, day: Weekday) -> &[Booking] {
        self.bookings.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, day: Weekday) -> usize {
        self.bookings(day).len()
    }

    pub fn total(&self) -> usize {
        self.bookings.values().map(Vec::len).sum()
    }

    /// Make sure `day` shows up in exports even before its first booking.
    pub(crate) fn track(&mut self, day: Weekday) {
        self.bookings.entry(day).or_default();
    }

    pub(crate) fn append(&mut self, booking: Booking) {
        self.bookings.entry(booking.day).or_default().push(booking);
    }
}
