use wayfare_itinerary::models::ItineraryPayload;
use wayfare_itinerary::{ItineraryError, ItineraryManager};
use wayfare_store::MemoryStore;

fn manager() -> ItineraryManager {
    ItineraryManager::new(Box::new(MemoryStore::new()))
}

fn payload(destination: &str, start_date: u64, end_date: u64) -> ItineraryPayload {
    ItineraryPayload {
        destination: destination.to_string(),
        start_date,
        end_date,
    }
}

#[test]
fn test_add_then_get_roundtrip() {
    let mut manager = manager();

    let added = manager
        .add_itinerary(payload("Paris, France", 1_000, 2_000))
        .unwrap();
    assert!(!added.id.is_empty());
    assert!(added.created_at > 0);
    assert_eq!(added.updated_at, None);

    let fetched = manager.get_itinerary(&added.id).unwrap();
    assert_eq!(fetched, added);
}

#[test]
fn test_add_validation_leaves_store_untouched() {
    let mut manager = manager();
    manager.add_itinerary(payload("Oslo", 1_000, 2_000)).unwrap();

    let err = manager.add_itinerary(payload("", 1_000, 2_000)).unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));

    let err = manager
        .add_itinerary(payload("Oslo", 2_000, 1_000))
        .unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));

    let err = manager
        .add_itinerary(payload("Oslo", 2_000, 2_000))
        .unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));

    assert_eq!(manager.count_itineraries().unwrap(), 1);
}

#[test]
fn test_zero_timestamp_is_treated_as_missing() {
    let mut manager = manager();

    let err = manager.add_itinerary(payload("Oslo", 0, 2_000)).unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));

    let err = manager.add_itinerary(payload("Oslo", 1_000, 0)).unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));

    assert_eq!(manager.count_itineraries().unwrap(), 0);
}

#[test]
fn test_get_unknown_id() {
    let manager = manager();

    let err = manager.get_itinerary("missing").unwrap_err();
    assert!(matches!(err, ItineraryError::NotFound(_)));
}

#[test]
fn test_update_unknown_id_fails_not_found() {
    let mut manager = manager();

    let err = manager
        .update_itinerary("missing", payload("Oslo", 1_000, 2_000))
        .unwrap_err();
    assert!(matches!(err, ItineraryError::NotFound(_)));
}

#[test]
fn test_update_validation_takes_precedence() {
    let mut manager = manager();

    // Invalid payload against a missing id still reports validation
    let err = manager
        .update_itinerary("missing", payload("", 1_000, 2_000))
        .unwrap_err();
    assert!(matches!(err, ItineraryError::Validation(_)));
}

#[test]
fn test_update_overwrites_and_stamps() {
    let mut manager = manager();

    let added = manager.add_itinerary(payload("Oslo", 1_000, 2_000)).unwrap();
    let updated = manager
        .update_itinerary(&added.id, payload("Bergen", 3_000, 4_000))
        .unwrap();

    assert_eq!(updated.id, added.id);
    assert_eq!(updated.created_at, added.created_at);
    assert_eq!(updated.destination, "Bergen");
    assert_eq!(updated.start_date, 3_000);
    assert_eq!(updated.end_date, 4_000);
    assert!(updated.updated_at.unwrap() >= added.created_at);

    let fetched = manager.get_itinerary(&added.id).unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut manager = manager();

    let first = manager.add_itinerary(payload("Oslo", 1_000, 2_000)).unwrap();
    manager.add_itinerary(payload("Bergen", 1_000, 2_000)).unwrap();
    assert_eq!(manager.count_itineraries().unwrap(), 2);

    let deleted = manager.delete_itinerary(&first.id).unwrap();
    assert_eq!(deleted, first);
    assert_eq!(manager.count_itineraries().unwrap(), 1);

    let err = manager.get_itinerary(&first.id).unwrap_err();
    assert!(matches!(err, ItineraryError::NotFound(_)));

    let err = manager.delete_itinerary(&first.id).unwrap_err();
    assert!(matches!(err, ItineraryError::NotFound(_)));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let mut manager = manager();

    manager.add_itinerary(payload("Tokyo", 1_000, 2_000)).unwrap();
    manager.add_itinerary(payload("Toronto", 1_000, 2_000)).unwrap();
    manager.add_itinerary(payload("Paris", 1_000, 2_000)).unwrap();
    assert_eq!(manager.count_itineraries().unwrap(), 3);

    let hits = manager.search_itineraries("to").unwrap();
    let destinations: Vec<String> = hits.into_iter().map(|r| r.destination).collect();
    assert_eq!(destinations, vec!["Tokyo", "Toronto"]);

    let hits = manager.search_itineraries("paris").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].destination, "Paris");
}

#[test]
fn test_search_empty_keyword_matches_all() {
    let mut manager = manager();

    manager.add_itinerary(payload("Tokyo", 1_000, 2_000)).unwrap();
    manager.add_itinerary(payload("Toronto", 1_000, 2_000)).unwrap();

    assert_eq!(manager.search_itineraries("").unwrap().len(), 2);
}

#[test]
fn test_time_range_requires_full_containment() {
    let mut manager = manager();

    let inside = manager.add_itinerary(payload("Inside", 1_000, 2_000)).unwrap();
    // Straddles the lower bound
    manager.add_itinerary(payload("Early", 500, 1_500)).unwrap();
    // Straddles the upper bound
    manager.add_itinerary(payload("Late", 1_500, 2_500)).unwrap();
    // Exactly the query interval counts as contained
    let exact = manager.add_itinerary(payload("Exact", 1_000, 2_000)).unwrap();

    let hits = manager.list_itineraries_by_time_range(1_000, 2_000).unwrap();
    let ids: Vec<String> = hits.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![inside.id, exact.id]);
}

#[test]
fn test_pagination_slices_in_insertion_order() {
    let mut manager = manager();

    let mut ids = Vec::new();
    for destination in ["One", "Two", "Three", "Four", "Five"] {
        let record = manager.add_itinerary(payload(destination, 1_000, 2_000)).unwrap();
        ids.push(record.id);
    }

    let page = manager.list_itineraries_paginated(2, 2).unwrap();
    let page_ids: Vec<String> = page.into_iter().map(|r| r.id).collect();
    assert_eq!(page_ids, vec![ids[2].clone(), ids[3].clone()]);

    let page = manager.list_itineraries_paginated(3, 2).unwrap();
    let page_ids: Vec<String> = page.into_iter().map(|r| r.id).collect();
    assert_eq!(page_ids, vec![ids[4].clone()]);

    assert!(manager.list_itineraries_paginated(10, 2).unwrap().is_empty());
}

#[test]
fn test_pagination_zero_inputs_yield_empty() {
    let mut manager = manager();
    manager.add_itinerary(payload("Oslo", 1_000, 2_000)).unwrap();

    assert!(manager.list_itineraries_paginated(0, 2).unwrap().is_empty());
    assert!(manager.list_itineraries_paginated(1, 0).unwrap().is_empty());
}

#[test]
fn test_list_follows_insertion_order_across_updates() {
    let mut manager = manager();

    let first = manager.add_itinerary(payload("Tokyo", 1_000, 2_000)).unwrap();
    manager.add_itinerary(payload("Toronto", 1_000, 2_000)).unwrap();

    // An in-place update must not move the record to the back
    manager
        .update_itinerary(&first.id, payload("Kyoto", 1_000, 2_000))
        .unwrap();

    let destinations: Vec<String> = manager
        .list_itineraries()
        .unwrap()
        .into_iter()
        .map(|r| r.destination)
        .collect();
    assert_eq!(destinations, vec!["Kyoto", "Toronto"]);
}
