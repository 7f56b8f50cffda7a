//! Handlers for `/families/:code/stories` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  legacy::{NewStory, Story, StoryUpdate},
  store::LegacyStore,
};

use super::Success;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

const NOT_FOUND: &str = "Story not found";

/// `GET /families/:code/stories` — newest first.
pub async fn list<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<Json<Vec<Story>>, ApiError> {
  let rows = store
    .list_stories(&code)
    .await
    .map_err(|e| ApiError::store("Failed to fetch stories", e))?;
  Ok(Json(rows))
}

/// `POST /families/:code/stories`
pub async fn create<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
  AppJson(body): AppJson<NewStory>,
) -> Result<Json<Story>, ApiError> {
  let row = store
    .add_story(&code, body)
    .await
    .map_err(|e| ApiError::store("Failed to add story", e))?;
  Ok(Json(row))
}

/// `PUT /families/:code/stories/:id`
pub async fn update<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
  AppJson(body): AppJson<StoryUpdate>,
) -> Result<Json<Story>, ApiError> {
  let row = store
    .update_story(&code, id, body)
    .await
    .map_err(|e| ApiError::store("Failed to update story", e))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
  Ok(Json(row))
}

/// `DELETE /families/:code/stories/:id`
pub async fn remove<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
) -> Result<Json<Success>, ApiError> {
  let deleted = store
    .delete_story(&code, id)
    .await
    .map_err(|e| ApiError::store("Failed to delete", e))?;
  if !deleted {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  Ok(Json(Success::ok()))
}
