//! cogniplan-core
//!
//! Pure domain types shared by the scheduler, the rule table and the HTTP
//! service. No I/O lives here.

pub mod error;
pub mod models;
pub mod time_of_day;
