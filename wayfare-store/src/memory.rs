use std::collections::HashMap;

use tracing::info;
use wayfare_itinerary::models::Itinerary;
use wayfare_itinerary::repository::{ItineraryStore, StoreError};

/// In-memory ordered store (swap point for a persistent backend later).
///
/// `records` holds the data; `order` remembers insertion order so `values`
/// iterates the way the records arrived. Re-inserting an existing id
/// replaces the record without moving it.
#[derive(Default)]
pub struct MemoryStore {
    records: HashMap<String, Itinerary>,
    order: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl ItineraryStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Option<Itinerary>, StoreError> {
        Ok(self.records.get(id).cloned())
    }

    fn insert(&mut self, id: String, record: Itinerary) -> Result<(), StoreError> {
        if self.records.insert(id.clone(), record).is_none() {
            info!("Stored itinerary {}", id);
            self.order.push(id);
        }
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<Option<Itinerary>, StoreError> {
        let removed = self.records.remove(id);
        if removed.is_some() {
            self.order.retain(|key| key != id);
        }
        Ok(removed)
    }

    fn values(&self) -> Result<Vec<Itinerary>, StoreError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}
