use std::collections::BTreeMap;

use cogniplan_core::models::weekday::Weekday;
use cogniplan_core::time_of_day;
use jiff::civil::{Time, time};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A bookable stretch of a day with a fixed number of patient places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "time_of_day")]
    pub start: Time,
    #[serde(with = "time_of_day")]
    pub end: Time,
    #[serde(alias = "max_patients")]
    pub capacity: u32,
}

impl TimeWindow {
    pub const fn new(start: Time, end: Time, capacity: u32) -> Self {
        Self {
            start,
            end,
            capacity,
        }
    }
}

/// The recurring shape of the doctor's week.
///
/// Only days with at least one window are present; every other day is
/// unavailable. Validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Weekday, Vec<TimeWindow>>",
    into = "BTreeMap<Weekday, Vec<TimeWindow>>"
)]
pub struct WeeklyTemplate {
    days: BTreeMap<Weekday, Vec<TimeWindow>>,
}

impl WeeklyTemplate {
    pub fn new(days: BTreeMap<Weekday, Vec<TimeWindow>>) -> Result<Self, ScheduleError> {
        for (&day, windows) in &days {
            if windows.is_empty() {
                return Err(ScheduleError::EmptyDay { day });
            }
            let mut total: u32 = 0;
            for window in windows {
                if window.capacity == 0 {
                    return Err(ScheduleError::ZeroCapacity {
                        day,
                        start: time_of_day::format(window.start),
                    });
                }
                if window.end <= window.start {
                    return Err(ScheduleError::InvertedWindow {
                        day,
                        start: time_of_day::format(window.start),
                        end: time_of_day::format(window.end),
                    });
                }
                total = total
                    .checked_add(window.capacity)
                    .ok_or(ScheduleError::CapacityOverflow { day })?;
            }
        }
        Ok(Self { days })
    }

    /// Load a template from JSON of the form
    /// `{"Monday": [{"start": "09:00", "end": "11:00", "capacity": 4}]}`.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Windows for `day` in template order, or `None` if the day is closed.
    pub fn windows(&self, day: Weekday) -> Option<&[TimeWindow]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Sum of window capacities for `day`; zero for closed days. Construction
    /// guarantees the sum fits.
    pub fn total_capacity(&self, day: Weekday) -> u32 {
        self.windows(day)
            .map(|windows| windows.iter().map(|w| w.capacity).sum())
            .unwrap_or(0)
    }

    /// Open days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.keys().copied()
    }
}

impl Default for WeeklyTemplate {
    /// Two 2-hour windows of four patients on each weekday, closed weekends.
    fn default() -> Self {
        let two_windows = |first: Time, second: Time| {
            vec![
                TimeWindow::new(first, add_two_hours(first), 4),
                TimeWindow::new(second, add_two_hours(second), 4),
            ]
        };

        let days = BTreeMap::from([
            (Weekday::Monday, two_windows(time(9, 0, 0, 0), time(14, 0, 0, 0))),
            (Weekday::Tuesday, two_windows(time(10, 0, 0, 0), time(15, 0, 0, 0))),
            (Weekday::Wednesday, two_windows(time(9, 30, 0, 0), time(14, 30, 0, 0))),
            (Weekday::Thursday, two_windows(time(10, 30, 0, 0), time(15, 30, 0, 0))),
            (Weekday::Friday, two_windows(time(9, 0, 0, 0), time(14, 0, 0, 0))),
        ]);
        Self { days }
    }
}

fn add_two_hours(start: Time) -> Time {
    time(start.hour() + 2, start.minute(), 0, 0)
}

impl TryFrom<BTreeMap<Weekday, Vec<TimeWindow>>> for WeeklyTemplate {
    type Error = ScheduleError;

    fn try_from(days: BTreeMap<Weekday, Vec<TimeWindow>>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WeeklyTemplate> for BTreeMap<Weekday, Vec<TimeWindow>> {
    fn from(template: WeeklyTemplate) -> Self {
        template.days
    }
}
