pub mod level;
pub mod patient;
pub mod plan;
pub mod weekday;
