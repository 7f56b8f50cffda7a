//! Handlers for direct messages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users/:userId/messages` | Inbox of the user, newest first |
//! | `POST` | `/messages` | Status starts as `Sent` |
//! | `PUT`  | `/messages/:id/status` | Body: `{"status":"Read"}`; 404 if not found |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{DirectMessage, NewDirectMessage},
  status::MessageStatus,
  store::HarmonyStore,
};

use super::StatusBody;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /users/:userId/messages`
pub async fn inbox<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(user_id): AppPath<i64>,
) -> Result<Json<Vec<DirectMessage>>, ApiError> {
  let messages = store
    .list_messages_for(user_id)
    .await
    .map_err(|e| ApiError::store("Failed to fetch messages", e))?;
  Ok(Json(messages))
}

/// `POST /messages`
pub async fn send<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewDirectMessage>,
) -> Result<Json<DirectMessage>, ApiError> {
  let message = store
    .send_message(body)
    .await
    .map_err(|e| ApiError::store("Failed to send message", e))?;
  Ok(Json(message))
}

/// `PUT /messages/:id/status`
pub async fn set_status<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<StatusBody<MessageStatus>>,
) -> Result<Json<DirectMessage>, ApiError> {
  let message = store
    .set_message_status(id, body.status)
    .await
    .map_err(|e| ApiError::store("Failed to update message", e))?
    .ok_or_else(|| ApiError::NotFound("Message not found".to_owned()))?;
  Ok(Json(message))
}
