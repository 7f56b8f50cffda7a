//! Handlers for `/people/:personId/tributes` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{MemorialTribute, NewMemorialTribute},
  status::PostStatus,
  store::HarmonyStore,
};

use super::StatusBody;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /people/:personId/tributes` — visible tributes, newest first.
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(person_id): AppPath<i64>,
) -> Result<Json<Vec<MemorialTribute>>, ApiError> {
  let tributes = store
    .list_tributes(person_id)
    .await
    .map_err(|e| ApiError::store("Failed to fetch tributes", e))?;
  Ok(Json(tributes))
}

/// `POST /people/:personId/tributes` — body: `{"postedByUserId", "tributeContent"}`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(person_id): AppPath<i64>,
  AppJson(body): AppJson<NewMemorialTribute>,
) -> Result<Json<MemorialTribute>, ApiError> {
  let tribute = store
    .add_tribute(person_id, body)
    .await
    .map_err(|e| ApiError::store("Failed to add tribute", e))?;
  Ok(Json(tribute))
}

/// `PUT /people/:personId/tributes/:tributeId/status`
pub async fn set_status<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath((person_id, tribute_id)): AppPath<(i64, i64)>,
  AppJson(body): AppJson<StatusBody<PostStatus>>,
) -> Result<Json<MemorialTribute>, ApiError> {
  let tribute = store
    .set_tribute_status(person_id, tribute_id, body.status)
    .await
    .map_err(|e| ApiError::store("Failed to update tribute", e))?
    .ok_or_else(|| ApiError::NotFound("Tribute not found".to_owned()))?;
  tracing::info!(person_id, tribute_id, status = %body.status, "tribute moderated");
  Ok(Json(tribute))
}
