use crate::models::{Itinerary, ItineraryPayload};
use crate::repository::{ItineraryStore, StoreError};

/// Owns the itinerary collection and exposes every record operation.
///
/// The backing store is handed in at construction, so each caller (and each
/// test) works against its own isolated instance.
pub struct ItineraryManager {
    store: Box<dyn ItineraryStore>,
}

impl ItineraryManager {
    pub fn new(store: Box<dyn ItineraryStore>) -> Self {
        Self { store }
    }

    /// Every stored itinerary, in store iteration order.
    pub fn list_itineraries(&self) -> Result<Vec<Itinerary>, ItineraryError> {
        Ok(self.store.values()?)
    }

    pub fn get_itinerary(&self, id: &str) -> Result<Itinerary, ItineraryError> {
        self.store
            .get(id)?
            .ok_or_else(|| ItineraryError::NotFound(id.to_string()))
    }

    /// Validate the payload, assign a fresh id and creation time, store.
    pub fn add_itinerary(
        &mut self,
        payload: ItineraryPayload,
    ) -> Result<Itinerary, ItineraryError> {
        validate(&payload)?;

        let record = Itinerary::new(payload);
        self.store.insert(record.id.clone(), record.clone())?;
        Ok(record)
    }

    /// Overwrite destination and dates on an existing record.
    ///
    /// Validation runs before the existence check, so a bad payload reports
    /// a validation error even when the id is unknown.
    pub fn update_itinerary(
        &mut self,
        id: &str,
        payload: ItineraryPayload,
    ) -> Result<Itinerary, ItineraryError> {
        validate(&payload)?;

        let mut record = self
            .store
            .get(id)?
            .ok_or_else(|| ItineraryError::NotFound(id.to_string()))?;
        record.apply(payload);
        self.store.insert(record.id.clone(), record.clone())?;
        Ok(record)
    }

    /// Remove and return the record.
    pub fn delete_itinerary(&mut self, id: &str) -> Result<Itinerary, ItineraryError> {
        self.store
            .remove(id)?
            .ok_or_else(|| ItineraryError::NotFound(id.to_string()))
    }

    /// Case-insensitive substring match against each destination. The empty
    /// keyword matches every record.
    pub fn search_itineraries(&self, keyword: &str) -> Result<Vec<Itinerary>, ItineraryError> {
        let needle = keyword.to_lowercase();
        let matches = self
            .store
            .values()?
            .into_iter()
            .filter(|record| record.destination.to_lowercase().contains(&needle))
            .collect();
        Ok(matches)
    }

    pub fn count_itineraries(&self) -> Result<usize, ItineraryError> {
        Ok(self.store.len()?)
    }

    /// 1-based pagination over the full ordered list. A page outside the
    /// stored range yields an empty list; so do page 0 and page size 0.
    pub fn list_itineraries_paginated(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Itinerary>, ItineraryError> {
        if page == 0 || page_size == 0 {
            return Ok(Vec::new());
        }

        let start = (page - 1).saturating_mul(page_size);
        let slice = self
            .store
            .values()?
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();
        Ok(slice)
    }

    /// Records whose interval lies fully inside `[start_time, end_time]`.
    pub fn list_itineraries_by_time_range(
        &self,
        start_time: u64,
        end_time: u64,
    ) -> Result<Vec<Itinerary>, ItineraryError> {
        let matches = self
            .store
            .values()?
            .into_iter()
            .filter(|record| record.start_date >= start_time && record.end_date <= end_time)
            .collect();
        Ok(matches)
    }
}

/// Shared add/update payload checks, run before any store access.
/// A zero timestamp is treated as a missing field, not as the epoch.
fn validate(payload: &ItineraryPayload) -> Result<(), ItineraryError> {
    if payload.destination.is_empty() {
        return Err(ItineraryError::Validation("destination is required".to_string()));
    }
    if payload.start_date == 0 {
        return Err(ItineraryError::Validation("start date is required".to_string()));
    }
    if payload.end_date == 0 {
        return Err(ItineraryError::Validation("end date is required".to_string()));
    }
    if payload.start_date >= payload.end_date {
        return Err(ItineraryError::Validation(
            "start date must be before end date".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Itinerary not found: {0}")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}
