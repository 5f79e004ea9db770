pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{ItineraryError, ItineraryManager};
pub use models::{Itinerary, ItineraryPayload};
pub use repository::{ItineraryStore, StoreError};
