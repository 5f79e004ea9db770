use crate::models::Itinerary;

/// Ordered key-value seam for itinerary persistence.
///
/// Implementations iterate `values` in insertion order and keep an existing
/// key's position when it is re-inserted.
pub trait ItineraryStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Itinerary>, StoreError>;

    /// Upsert: a new key appends, an existing key is replaced in place.
    fn insert(&mut self, id: String, record: Itinerary) -> Result<(), StoreError>;

    fn remove(&mut self, id: &str) -> Result<Option<Itinerary>, StoreError>;

    /// Every stored record, in insertion order.
    fn values(&self) -> Result<Vec<Itinerary>, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;
}

/// Faults raised by the backing medium itself
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),
}
