use std::sync::Arc;
use tokio::sync::RwLock;
use wayfare_itinerary::ItineraryManager;

/// Shared handle to the one manager instance; the lock serializes access
/// for the synchronous manager underneath.
#[derive(Clone)]
pub struct AppState {
    pub itineraries: Arc<RwLock<ItineraryManager>>,
}

impl AppState {
    pub fn new(manager: ItineraryManager) -> Self {
        Self {
            itineraries: Arc::new(RwLock::new(manager)),
        }
    }
}
