//! Handlers for `/families` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/families` | Body: `{"familyCode", "userName"}`; 409 if the code is taken |
//! | `POST` | `/families/join` | 404 if the family does not exist |
//! | `GET`  | `/families/:code/members` | Most recently joined first |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  legacy::{FamilyMember, FamilyRequest},
  store::LegacyStore,
};

use super::Success;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `POST /families`
pub async fn create<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<FamilyRequest>,
) -> Result<Json<Success>, ApiError> {
  let family = store
    .create_family(body)
    .await
    .map_err(|e| ApiError::store("Failed to create family", e))?;
  Ok(Json(Success { success: true, family_code: Some(family.family_code) }))
}

/// `POST /families/join`
pub async fn join<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<FamilyRequest>,
) -> Result<Json<Success>, ApiError> {
  let member = store
    .join_family(body)
    .await
    .map_err(|e| ApiError::store("Failed to join family", e))?
    .ok_or_else(|| ApiError::NotFound("Family not found".to_owned()))?;
  tracing::info!(family_code = %member.family_code, member_id = member.id, "member joined");
  Ok(Json(Success::ok()))
}

/// `GET /families/:code/members`
pub async fn members<S: LegacyStore>(
  State(store): State<Arc<S>>,
  AppPath(code): AppPath<String>,
) -> Result<Json<Vec<FamilyMember>>, ApiError> {
  let members = store
    .list_members(&code)
    .await
    .map_err(|e| ApiError::store("Failed to fetch members", e))?;
  Ok(Json(members))
}
