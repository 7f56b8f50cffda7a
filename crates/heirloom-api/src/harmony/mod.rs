//! Routes of the "Project Harmony" variant.

pub mod albums;
pub mod groups;
pub mod invites;
pub mod messages;
pub mod people;
pub mod relationships;
pub mod timeline;
pub mod tributes;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use heirloom_core::store::HarmonyStore;
use serde::Deserialize;

use crate::health;

/// Body of every status-transition route: `{"status": "Hidden"}`.
#[derive(Debug, Deserialize)]
pub struct StatusBody<T> {
  pub status: T,
}

/// Build the Harmony API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn harmony_router<S>(store: Arc<S>) -> Router<()>
where
  S: HarmonyStore + 'static,
{
  Router::new()
    .route("/health", get(health::harmony))
    // Users
    .route("/users", get(users::list::<S>))
    .route("/users/register", post(users::register::<S>))
    .route("/users/{id}/messages", get(messages::inbox::<S>))
    // Invites
    .route("/invites", get(invites::list::<S>).post(invites::create::<S>))
    .route("/invites/{id}", put(invites::update::<S>))
    // Groups
    .route("/groups", get(groups::list::<S>).post(groups::create::<S>))
    .route(
      "/groups/{id}/members",
      get(groups::list_members::<S>).post(groups::add_member::<S>),
    )
    // People
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route("/people/{id}", put(people::update::<S>))
    .route(
      "/people/{id}/tributes",
      get(tributes::list::<S>).post(tributes::create::<S>),
    )
    .route(
      "/people/{id}/tributes/{tribute_id}/status",
      put(tributes::set_status::<S>),
    )
    // Relationships
    .route(
      "/relationships",
      get(relationships::list::<S>).post(relationships::create::<S>),
    )
    // Timeline
    .route("/timeline", get(timeline::list::<S>).post(timeline::create::<S>))
    .route("/timeline/{id}/status", put(timeline::set_status::<S>))
    // Media
    .route("/albums", get(albums::list::<S>).post(albums::create::<S>))
    .route(
      "/albums/{id}/items",
      get(albums::list_items::<S>).post(albums::add_item::<S>),
    )
    .route(
      "/albums/{id}/items/{item_id}/status",
      put(albums::set_item_status::<S>),
    )
    // Messages
    .route("/messages", post(messages::send::<S>))
    .route("/messages/{id}/status", put(messages::set_status::<S>))
    .with_state(store)
}
