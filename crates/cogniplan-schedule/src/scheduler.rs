use std::collections::BTreeMap;

use cogniplan_core::models::weekday::Weekday;
use cogniplan_core::time_of_day;
use jiff::ToSpan;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::ledger::{Booking, BookingLedger};
use crate::template::WeeklyTemplate;

/// Calendar days scanned per request, starting with the reference date.
pub const LOOKAHEAD_DAYS: i32 = 14;

pub const UNAVAILABLE_DATE: &str = "N/A";
pub const UNAVAILABLE_DAY: &str = "No Availability";
pub const UNAVAILABLE_TIME: &str = "N/A";
pub const UNAVAILABLE_DATETIME: &str = "No available slots found";

/// A slot that has been committed to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentSlot {
    pub date: Date,
    pub day: Weekday,
    pub time: Time,
}

impl AppointmentSlot {
    /// `YYYY-MM-DD HH:MM`
    pub fn full_datetime(&self) -> String {
        format!("{} {}", self.date, time_of_day::format(self.time))
    }
}

/// Outcome of a slot request. Running out of horizon is an ordinary answer,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "SlotRecord")]
pub enum NextSlot {
    Booked(AppointmentSlot),
    NoAvailability,
}

impl NextSlot {
    pub fn is_booked(&self) -> bool {
        matches!(self, NextSlot::Booked(_))
    }

    pub fn full_datetime(&self) -> String {
        match self {
            NextSlot::Booked(slot) => slot.full_datetime(),
            NextSlot::NoAvailability => UNAVAILABLE_DATETIME.to_string(),
        }
    }
}

/// Flat wire form of [`NextSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub date: String,
    pub day: String,
    pub time: String,
    pub full_datetime: String,
}

impl From<NextSlot> for SlotRecord {
    fn from(slot: NextSlot) -> Self {
        match slot {
            NextSlot::Booked(booked) => SlotRecord {
                date: booked.date.to_string(),
                day: booked.day.name().to_string(),
                time: time_of_day::format(booked.time),
                full_datetime: booked.full_datetime(),
            },
            NextSlot::NoAvailability => SlotRecord {
                date: UNAVAILABLE_DATE.to_string(),
                day: UNAVAILABLE_DAY.to_string(),
                time: UNAVAILABLE_TIME.to_string(),
                full_datetime: UNAVAILABLE_DATETIME.to_string(),
            },
        }
    }
}

/// Occupancy of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub total_slots: u32,
    pub booked_slots: usize,
    pub availability_percentage: f64,
}

pub struct AvailabilityScheduler {
    template: WeeklyTemplate,
    ledger: BookingLedger,
}

impl AvailabilityScheduler {
    pub fn new(template: WeeklyTemplate) -> Self {
        Self::with_ledger(template, BookingLedger::new())
    }

    /// Build a scheduler around an existing ledger.
    pub fn with_ledger(template: WeeklyTemplate, mut ledger: BookingLedger) -> Self {
        for day in template.days() {
            ledger.track(day);
        }
        Self { template, ledger }
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Book the earliest open slot within [`LOOKAHEAD_DAYS`] of `from`
    /// (today when `None`).
    ///
    /// Occupancy is counted per weekday against the sum of that day's window
    /// capacities, and the day's first window is always the one offered while
    /// any capacity remains. Later windows are therefore never handed out.
    pub fn find_next_available_slot(&mut self, priority: &str, from: Option<Date>) -> NextSlot {
        let from = from.unwrap_or_else(today);

        for offset in 0..LOOKAHEAD_DAYS {
            let Ok(date) = from.checked_add(offset.days()) else {
                break;
            };
            let day = Weekday::of(date);
            let Some(first) = self.template.windows(day).and_then(|w| w.first()) else {
                continue;
            };

            let capacity = self.template.total_capacity(day) as usize;
            if self.ledger.count(day) >= capacity {
                continue;
            }

            self.ledger.append(Booking {
                date,
                day,
                time: first.start,
                priority: priority.to_string(),
            });
            let slot = AppointmentSlot {
                date,
                day,
                time: first.start,
            };
            tracing::info!(
                priority,
                date = %slot.date,
                day = %slot.day,
                time = %time_of_day::format(slot.time),
                booked = self.ledger.count(day),
                capacity,
                "appointment booked"
            );
            return NextSlot::Booked(slot);
        }

        tracing::warn!(priority, from = %from, "no availability within look-ahead horizon");
        NextSlot::NoAvailability
    }

    /// Capacity and occupancy for every open weekday.
    pub fn availability_report(&self) -> BTreeMap<Weekday, DayAvailability> {
        self.template
            .days()
            .map(|day| {
                // Templates reject zero-capacity days, so `total` is never zero.
                let total = self.template.total_capacity(day);
                let booked = self.ledger.count(day);
                let availability = DayAvailability {
                    total_slots: total,
                    booked_slots: booked,
                    availability_percentage: (1.0 - booked as f64 / total as f64) * 100.0,
                };
                (day, availability)
            })
            .collect()
    }

    /// The whole ledger as JSON text.
    pub fn export_bookings(&self) -> Result<String, ScheduleError> {
        Ok(serde_json::to_string(&self.ledger)?)
    }
}

impl Default for AvailabilityScheduler {
    fn default() -> Self {
        Self::new(WeeklyTemplate::default())
    }
}

fn today() -> Date {
    jiff::Zoned::now().date()
}
