//! cogniplan-schedule
//!
//! Weekly doctor availability and first-fit slot allocation. A scheduler owns
//! one immutable [`WeeklyTemplate`] and one growing [`BookingLedger`]; it has
//! no interior locking, so callers that share it across tasks wrap it in a
//! mutex.

pub mod error;
pub mod ledger;
pub mod scheduler;
pub mod template;

pub use ledger::{Booking, BookingLedger};
pub use scheduler::{AppointmentSlot, AvailabilityScheduler, DayAvailability, NextSlot, SlotRecord};
pub use template::{TimeWindow, WeeklyTemplate};
