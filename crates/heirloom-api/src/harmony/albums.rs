//! Handlers for `/albums` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/albums` | |
//! | `POST` | `/albums` | |
//! | `GET`  | `/albums/:albumId/items` | Visible items only |
//! | `POST` | `/albums/:albumId/items` | Unknown album is a bad request |
//! | `PUT`  | `/albums/:albumId/items/:itemId/status` | 404 unless the item is in that album |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{MediaAlbum, MediaItem, NewMediaAlbum, NewMediaItem},
  status::PostStatus,
  store::HarmonyStore,
};

use super::StatusBody;
use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

// ─── Albums ───────────────────────────────────────────────────────────────────

/// `GET /albums`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<MediaAlbum>>, ApiError> {
  let albums = store
    .list_albums()
    .await
    .map_err(|e| ApiError::store("Failed to fetch albums", e))?;
  Ok(Json(albums))
}

/// `POST /albums`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewMediaAlbum>,
) -> Result<Json<MediaAlbum>, ApiError> {
  let album = store
    .add_album(body)
    .await
    .map_err(|e| ApiError::store("Failed to create album", e))?;
  Ok(Json(album))
}

// ─── Items ────────────────────────────────────────────────────────────────────

/// `GET /albums/:albumId/items`
pub async fn list_items<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(album_id): AppPath<i64>,
) -> Result<Json<Vec<MediaItem>>, ApiError> {
  let items = store
    .list_media_items(album_id)
    .await
    .map_err(|e| ApiError::store("Failed to fetch media items", e))?;
  Ok(Json(items))
}

/// `POST /albums/:albumId/items`
pub async fn add_item<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(album_id): AppPath<i64>,
  AppJson(body): AppJson<NewMediaItem>,
) -> Result<Json<MediaItem>, ApiError> {
  let item = store
    .add_media_item(album_id, body)
    .await
    .map_err(|e| ApiError::store("Failed to add media item", e))?;
  Ok(Json(item))
}

/// `PUT /albums/:albumId/items/:itemId/status`
pub async fn set_item_status<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath((album_id, item_id)): AppPath<(i64, i64)>,
  AppJson(body): AppJson<StatusBody<PostStatus>>,
) -> Result<Json<MediaItem>, ApiError> {
  let item = store
    .set_media_item_status(album_id, item_id, body.status)
    .await
    .map_err(|e| ApiError::store("Failed to update media item", e))?
    .ok_or_else(|| ApiError::NotFound("Media item not found".to_owned()))?;
  tracing::info!(album_id, item_id, status = %body.status, "media item moderated");
  Ok(Json(item))
}
