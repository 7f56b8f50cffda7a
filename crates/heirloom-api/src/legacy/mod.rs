//! Routes of the "Family Legacy" variant.
//!
//! Everything below `/families/:code` is scoped to that family. An item id
//! that belongs to another family is answered with 404.

pub mod events;
pub mod families;
pub mod stories;
pub mod tree;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use heirloom_core::store::LegacyStore;
use serde::Serialize;

use crate::health;

/// Acknowledgement body for writes that return no row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Success {
  pub success:     bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub family_code: Option<String>,
}

impl Success {
  pub fn ok() -> Self { Self { success: true, family_code: None } }
}

/// Build the Legacy API router for `store`.
pub fn legacy_router<S>(store: Arc<S>) -> Router<()>
where
  S: LegacyStore + 'static,
{
  Router::new()
    .route("/health", get(health::legacy))
    // Families
    .route("/families", post(families::create::<S>))
    .route("/families/join", post(families::join::<S>))
    .route("/families/{code}/members", get(families::members::<S>))
    // Tree
    .route(
      "/families/{code}/tree",
      get(tree::list::<S>).post(tree::create::<S>),
    )
    .route(
      "/families/{code}/tree/{id}",
      put(tree::update::<S>).delete(tree::remove::<S>),
    )
    // Stories
    .route(
      "/families/{code}/stories",
      get(stories::list::<S>).post(stories::create::<S>),
    )
    .route(
      "/families/{code}/stories/{id}",
      put(stories::update::<S>).delete(stories::remove::<S>),
    )
    // Events
    .route(
      "/families/{code}/events",
      get(events::list::<S>).post(events::create::<S>),
    )
    .route(
      "/families/{code}/events/{id}",
      put(events::update::<S>).delete(events::remove::<S>),
    )
    .with_state(store)
}
