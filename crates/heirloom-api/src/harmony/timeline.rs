//! Handlers for `/timeline` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/timeline` | Visible events, latest first |
//! | `POST` | `/timeline` | |
//! | `PUT`  | `/timeline/:id/status` | Body: `{"status":"Hidden"}`; 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{NewTimelineEvent, TimelineEvent},
  status::PostStatus,
  store::HarmonyStore,
};

use super::StatusBody;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /timeline`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<TimelineEvent>>, ApiError> {
  let events = store
    .list_timeline()
    .await
    .map_err(|e| ApiError::store("Failed to fetch timeline", e))?;
  Ok(Json(events))
}

/// `POST /timeline`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewTimelineEvent>,
) -> Result<Json<TimelineEvent>, ApiError> {
  let event = store
    .add_timeline_event(body)
    .await
    .map_err(|e| ApiError::store("Failed to add timeline event", e))?;
  Ok(Json(event))
}

/// `PUT /timeline/:id/status`
pub async fn set_status<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<StatusBody<PostStatus>>,
) -> Result<Json<TimelineEvent>, ApiError> {
  let event = store
    .set_timeline_event_status(id, body.status)
    .await
    .map_err(|e| ApiError::store("Failed to update timeline event", e))?
    .ok_or_else(|| ApiError::NotFound("Timeline event not found".to_owned()))?;
  tracing::info!(event_id = id, status = %body.status, "timeline event moderated");
  Ok(Json(event))
}
