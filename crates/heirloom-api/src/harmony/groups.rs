//! Handlers for `/groups` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/groups` | |
//! | `POST` | `/groups` | `groupType` defaults to `Secret` |
//! | `GET`  | `/groups/:groupId/members` | |
//! | `POST` | `/groups/:groupId/members` | Body: `{"userId"}`; 409 if already a member |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{Group, GroupMember, NewGroup},
  store::HarmonyStore,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /groups`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Group>>, ApiError> {
  let groups = store
    .list_groups()
    .await
    .map_err(|e| ApiError::store("Failed to fetch groups", e))?;
  Ok(Json(groups))
}

/// `POST /groups`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewGroup>,
) -> Result<Json<Group>, ApiError> {
  let group = store
    .add_group(body)
    .await
    .map_err(|e| ApiError::store("Failed to create group", e))?;
  Ok(Json(group))
}

// ─── Membership ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberBody {
  pub user_id: Option<i64>,
}

/// `GET /groups/:groupId/members`
pub async fn list_members<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(group_id): AppPath<i64>,
) -> Result<Json<Vec<GroupMember>>, ApiError> {
  let members = store
    .list_group_members(group_id)
    .await
    .map_err(|e| ApiError::store("Failed to fetch group members", e))?;
  Ok(Json(members))
}

/// `POST /groups/:groupId/members`
pub async fn add_member<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(group_id): AppPath<i64>,
  AppJson(body): AppJson<AddMemberBody>,
) -> Result<Json<GroupMember>, ApiError> {
  let member = store
    .add_group_member(group_id, body.user_id)
    .await
    .map_err(|e| ApiError::store("Failed to add group member", e))?;
  Ok(Json(member))
}
