//! Handlers for `/families/:code/tree` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  legacy::{NewTreeMember, TreeMember, TreeMemberUpdate},
  store::LegacyStore,
};

use super::Success;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

const NOT_FOUND: &str = "Tree member not found";

/// `GET /families/:code/tree` — newest first.
pub async fn list<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<Json<Vec<TreeMember>>, ApiError> {
  let rows = store
    .list_tree(&code)
    .await
    .map_err(|e| ApiError::store("Failed to fetch tree", e))?;
  Ok(Json(rows))
}

/// `POST /families/:code/tree`
pub async fn create<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
  AppJson(body): AppJson<NewTreeMember>,
) -> Result<Json<TreeMember>, ApiError> {
  let row = store
    .add_tree_member(&code, body)
    .await
    .map_err(|e| ApiError::store("Failed to add tree member", e))?;
  Ok(Json(row))
}

/// `PUT /families/:code/tree/:id`
pub async fn update<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
  AppJson(body): AppJson<TreeMemberUpdate>,
) -> Result<Json<TreeMember>, ApiError> {
  let row = store
    .update_tree_member(&code, id, body)
    .await
    .map_err(|e| ApiError::store("Failed to update", e))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
  Ok(Json(row))
}

/// `DELETE /families/:code/tree/:id`
pub async fn remove<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath((code, id)): AppPath<(String, i64)>,
) -> Result<Json<Success>, ApiError> {
  let deleted = store
    .delete_tree_member(&code, id)
    .await
    .map_err(|e| ApiError::store("Failed to delete", e))?;
  if !deleted {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  Ok(Json(Success::ok()))
}
