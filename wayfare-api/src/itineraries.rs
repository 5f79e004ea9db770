use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use wayfare_itinerary::models::{Itinerary, ItineraryPayload};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct TimeRangeQuery {
    pub start_time: u64,
    pub end_time: u64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/itineraries", get(list_itineraries).post(add_itinerary))
        .route("/v1/itineraries/count", get(count_itineraries))
        .route("/v1/itineraries/search", get(search_itineraries))
        .route("/v1/itineraries/paginated", get(list_itineraries_paginated))
        .route("/v1/itineraries/range", get(list_itineraries_by_time_range))
        .route(
            "/v1/itineraries/{id}",
            get(get_itinerary)
                .put(update_itinerary)
                .delete(delete_itinerary),
        )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/itineraries
pub async fn list_itineraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Itinerary>>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(manager.list_itineraries()?))
}

/// POST /v1/itineraries
pub async fn add_itinerary(
    State(state): State<AppState>,
    Json(payload): Json<ItineraryPayload>,
) -> Result<Json<Itinerary>, AppError> {
    let mut manager = state.itineraries.write().await;
    let record = manager.add_itinerary(payload)?;
    tracing::info!("Created itinerary {} for {}", record.id, record.destination);
    Ok(Json(record))
}

/// GET /v1/itineraries/:id
pub async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Itinerary>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(manager.get_itinerary(&id)?))
}

/// PUT /v1/itineraries/:id
pub async fn update_itinerary(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ItineraryPayload>,
) -> Result<Json<Itinerary>, AppError> {
    let mut manager = state.itineraries.write().await;
    Ok(Json(manager.update_itinerary(&id, payload)?))
}

/// DELETE /v1/itineraries/:id
/// Returns the deleted record
pub async fn delete_itinerary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Itinerary>, AppError> {
    let mut manager = state.itineraries.write().await;
    let record = manager.delete_itinerary(&id)?;
    tracing::info!("Deleted itinerary {}", record.id);
    Ok(Json(record))
}

/// GET /v1/itineraries/search?keyword=
pub async fn search_itineraries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Itinerary>>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(manager.search_itineraries(&query.keyword)?))
}

/// GET /v1/itineraries/count
pub async fn count_itineraries(
    State(state): State<AppState>,
) -> Result<Json<usize>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(manager.count_itineraries()?))
}

/// GET /v1/itineraries/paginated?page=&page_size=
pub async fn list_itineraries_paginated(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<Itinerary>>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(
        manager.list_itineraries_paginated(query.page, query.page_size)?,
    ))
}

/// GET /v1/itineraries/range?start_time=&end_time=
pub async fn list_itineraries_by_time_range(
    State(state): State<AppState>,
    Query(query): Query<TimeRangeQuery>,
) -> Result<Json<Vec<Itinerary>>, AppError> {
    let manager = state.itineraries.read().await;
    Ok(Json(
        manager.list_itineraries_by_time_range(query.start_time, query.end_time)?,
    ))
}
