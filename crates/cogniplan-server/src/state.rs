use std::sync::Arc;

use cogniplan_schedule::AvailabilityScheduler;
use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The scheduler checks capacity and appends in two steps, so every booking
/// path holds the mutex across the whole call.
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<Mutex<AvailabilityScheduler>>,
}

impl AppState {
    pub fn new(scheduler: AvailabilityScheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
        }
    }
}
