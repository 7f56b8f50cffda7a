//! Handlers for `/people` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | Ordered by name |
//! | `POST` | `/people` | |
//! | `PUT`  | `/people/:id` | Full replace of the scalar fields; `null` if no row matched |

use std::sync::Arc;

use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{NewPerson, Person, PersonUpdate},
  store::HarmonyStore,
};

use crate::{
  error::ApiError,
  extract::{AppJson, AppPath},
};

/// `GET /people`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Person>>, ApiError> {
  let people = store
    .list_people()
    .await
    .map_err(|e| ApiError::store("Failed to fetch people", e))?;
  Ok(Json(people))
}

/// `POST /people`
pub async fn create<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<NewPerson>,
) -> Result<Json<Person>, ApiError> {
  let person = store
    .add_person(body)
    .await
    .map_err(|e| ApiError::store("Failed to add person", e))?;
  Ok(Json(person))
}

/// `PUT /people/:id`
///
/// Clients of this variant expect a 200 even when the id matched nothing,
/// so a missing row is answered with a `null` body rather than a 404.
pub async fn update<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppPath(id): AppPath<i64>,
  AppJson(body): AppJson<PersonUpdate>,
) -> Result<Json<Option<Person>>, ApiError> {
  let person = store
    .update_person(id, body)
    .await
    .map_err(|e| ApiError::store("Failed to update person", e))?;
  Ok(Json(person))
}
