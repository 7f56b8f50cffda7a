//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/users/register` | Body: `{"name", "email", "password"}` |
//! | `GET`  | `/users` | Public columns only |

use std::sync::Arc;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{Json, extract::State};
use heirloom_core::{
  harmony::{NewUser, User},
  store::HarmonyStore,
};
use rand_core::OsRng;
use serde::Deserialize;

use crate::{error::ApiError, extract::AppJson};

const REGISTER_FAILED: &str = "Failed to register user";

#[derive(Debug, Default, Deserialize)]
pub struct RegisterBody {
  pub name:     Option<String>,
  pub email:    Option<String>,
  pub password: Option<String>,
}

/// `POST /users/register`
pub async fn register<S: HarmonyStore>(
  State(store): State<Arc<S>>,
  AppJson(body): AppJson<RegisterBody>,
) -> Result<Json<User>, ApiError> {
  let password = body
    .password
    .ok_or_else(|| ApiError::BadRequest(REGISTER_FAILED.to_owned()))?;

  let salt = SaltString::generate(&mut OsRng);
  let password_hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map_err(|e| {
      tracing::error!(error = %e, "password hashing failed");
      ApiError::Internal(REGISTER_FAILED)
    })?
    .to_string();

  let user = store
    .register_user(NewUser { name: body.name, email: body.email, password_hash })
    .await
    .map_err(|e| ApiError::store(REGISTER_FAILED, e))?;
  Ok(Json(user))
}

/// `GET /users`
pub async fn list<S: HarmonyStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<User>>, ApiError> {
  let users = store
    .list_users()
    .await
    .map_err(|e| ApiError::store("Failed to fetch users", e))?;
  Ok(Json(users))
}
