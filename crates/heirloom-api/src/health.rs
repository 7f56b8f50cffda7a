//! `GET /health`

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
  pub status:  &'static str,
  pub message: &'static str,
}

pub async fn harmony() -> Json<Health> {
  Json(Health { status: "ok", message: "Project Harmony API is running" })
}

pub async fn legacy() -> Json<Health> {
  Json(Health { status: "ok", message: "Family Legacy API is running" })
}
