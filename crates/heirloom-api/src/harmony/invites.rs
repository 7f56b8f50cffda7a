//! Handlers for `/invites` endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{Invite, InviteUpdate, NewInvite},
  store::HarmonyStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /invites` — newest first.
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Invite>>, ApiError> {
  let invites = store
    .list_invites()
    .await
    .map_err(|e| ApiError::store("Failed to fetch invites", e))?;
  Ok(Json(invites))
}

/// `POST /invites`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewInvite>,
) -> Result<Json<Invite>, ApiError> {
  let invite = store
    .add_invite(body)
    .await
    .map_err(|e| ApiError::store("Failed to create invite", e))?;
  Ok(Json(invite))
}

/// `PUT /invites/:id` — same `null`-on-miss contract as `PUT /people/:id`.
pub async fn update<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<InviteUpdate>,
) -> Result<Json<Option<Invite>>, ApiError> {
  let invite = store
    .update_invite(id, body)
    .await
    .map_err(|e| ApiError::store("Failed to update invite", e))?;
  Ok(Json(invite))
}
