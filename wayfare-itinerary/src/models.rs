use serde::{Deserialize, Serialize};
use wayfare_core::{clock, ids};

/// A stored travel itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Itinerary {
    pub id: String,
    pub destination: String,
    pub start_date: u64,
    pub end_date: u64,
    pub created_at: u64,
    pub updated_at: Option<u64>,
}

impl Itinerary {
    pub fn new(payload: ItineraryPayload) -> Self {
        Self {
            id: ids::new_id(),
            destination: payload.destination,
            start_date: payload.start_date,
            end_date: payload.end_date,
            created_at: clock::now_nanos(),
            updated_at: None,
        }
    }

    /// Overwrite the caller-editable fields and stamp the update time.
    /// `id` and `created_at` never change.
    pub fn apply(&mut self, payload: ItineraryPayload) {
        self.destination = payload.destination;
        self.start_date = payload.start_date;
        self.end_date = payload.end_date;
        self.updated_at = Some(clock::now_nanos());
    }
}

/// Caller-supplied fields for creating or updating an itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPayload {
    pub destination: String,
    pub start_date: u64,
    pub end_date: u64,
}
