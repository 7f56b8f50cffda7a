//! Handlers for `/relationships` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{NewRelationship, Relationship},
  store::HarmonyStore,
};

use crate::{error::ApiError, extract::AppJson};

/// `GET /relationships`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Relationship>>, ApiError> {
  let relationships = store
    .list_relationships()
    .await
    .map_err(|e| ApiError::store("Failed to fetch relationships", e))?;
  Ok(Json(relationships))
}

/// `POST /relationships` — body: `{"person1Id", "person2Id", "relationshipType"}`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewRelationship>,
) -> Result<Json<Relationship>, ApiError> {
  let relationship = store
    .add_relationship(body)
    .await
    .map_err(|e| ApiError::store("Failed to add relationship", e))?;
  Ok(Json(relationship))
}
