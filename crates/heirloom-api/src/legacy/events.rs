//! Handlers for `/families/:code/events` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  legacy::{FamilyEvent, FamilyEventUpdate, NewFamilyEvent},
  store::LegacyStore,
};

use super::Success;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

const NOT_FOUND: &str = "Event not found";

/// `GET /families/:code/events` — in calendar order.
pub async fn list<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<Json<Vec<FamilyEvent>>, ApiError> {
  let rows = store
    .list_events(&code)
    .await
    .map_err(|e| ApiError::store("Failed to fetch events", e))?;
  Ok(Json(rows))
}

/// `POST /families/:code/events`
pub async fn create<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
  AppJson(body): AppJson<NewFamilyEvent>,
) -> Result<Json<FamilyEvent>, ApiError> {
  let row = store
    .add_event(&code, body)
    .await
    .map_err(|e| ApiError::store("Failed to add event", e))?;
  Ok(Json(row))
}

/// `PUT /families/:code/events/:id`
pub async fn update<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
  AppJson(body): AppJson<FamilyEventUpdate>,
) -> Result<Json<FamilyEvent>, ApiError> {
  let row = store
    .update_event(&code, id, body)
    .await
    .map_err(|e| ApiError::store("Failed to update event", e))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
  Ok(Json(row))
}

/// `DELETE /families/:code/events/:id`
pub async fn remove<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
) -> Result<Json<Success>, ApiError> {
  let deleted = store
    .delete_event(&code, id)
    .await
    .map_err(|e| ApiError::store("Failed to delete", e))?;
  if !deleted {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  Ok(Json(Success::ok()))
}
