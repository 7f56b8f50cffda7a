use std::sync::Arc;

use axum::{Router, http::StatusCode};
use heirloom_store_sqlite::SqliteLegacyStore;
use serde_json::json;

use super::call;
use crate::legacy_router;

async fn app() -> Router {
  let store = SqliteLegacyStore::open_in_memory().await.unwrap();
  Router::new().nest("/api", legacy_router(Arc::new(store)))
}

async fn family(app: &Router, code: &str, admin: &str) {
  let (status, body) = call(
    app,
    "POST",
    "/api/families",
    Some(json!({ "familyCode": code, "userName": admin })),
  )
  .await;
  assert_eq!(status, StatusCode::OK, "{body}");
  assert_eq!(body, json!({ "success": true, "familyCode": code }));
}

async fn count(app: &Router, uri: &str) -> usize {
  let (status, body) = call(app, "GET", uri, None).await;
  assert_eq!(status, StatusCode::OK);
  body.as_array().unwrap().len()
}

#[tokio::test]
async fn health_names_the_service() {
  let app = app().await;
  let (status, body) = call(&app, "GET", "/api/health", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Family Legacy API is running");
}

// ── Families ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn new_family_has_its_creator_as_only_admin() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  let (_, members) = call(&app, "GET", "/api/families/F1/members", None).await;
  let members = members.as_array().unwrap();
  assert_eq!(members.len(), 1);
  assert_eq!(members[0]["name"], "Alice");
  assert_eq!(members[0]["role"], "admin");
}

#[tokio::test]
async fn taken_family_code_is_a_conflict() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  let (status, body) = call(
    &app,
    "POST",
    "/api/families",
    Some(json!({ "familyCode": "F1", "userName": "Mallory" })),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body, json!({ "error": "Failed to create family" }));
  assert_eq!(count(&app, "/api/families/F1/members").await, 1);
}

#[tokio::test]
async fn joining_a_missing_family_is_not_found() {
  let app = app().await;
  let (status, body) = call(
    &app,
    "POST",
    "/api/families/join",
    Some(json!({ "familyCode": "NOPE", "userName": "Bob" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "error": "Family not found" }));
  assert_eq!(count(&app, "/api/families/NOPE/members").await, 0);
}

#[tokio::test]
async fn joining_adds_one_member() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  let (status, body) = call(
    &app,
    "POST",
    "/api/families/join",
    Some(json!({ "familyCode": "F1", "userName": "Bob" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "success": true }));

  let (_, members) = call(&app, "GET", "/api/families/F1/members", None).await;
  let members = members.as_array().unwrap();
  assert_eq!(members.len(), 2);
  assert_eq!(members[0]["name"], "Bob");
  assert_eq!(members[0]["role"], "member");
}

// ── Tree ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tree_member_lifecycle() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  let (status, row) = call(
    &app,
    "POST",
    "/api/families/F1/tree",
    Some(json!({
      "name": "Rose",
      "relationship": "Grandmother",
      "birthDate": "1931-04-07",
      "createdBy": "Alice",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(row["birth_date"], "1931-04-07");
  let id = row["id"].as_i64().unwrap();

  let (status, row) = call(
    &app,
    "PUT",
    &format!("/api/families/F1/tree/{id}"),
    Some(json!({ "name": "Rosa", "relationship": "Grandmother", "bio": "Choir" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(row["name"], "Rosa");
  assert_eq!(row["bio"], "Choir");

  let (status, body) =
    call(&app, "DELETE", &format!("/api/families/F1/tree/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "success": true }));
  assert_eq!(count(&app, "/api/families/F1/tree").await, 0);
}

#[tokio::test]
async fn updating_a_missing_tree_member_is_not_found() {
  let app = app().await;
  family(&app, "F1", "Alice").await;
  let (status, body) = call(
    &app,
    "PUT",
    "/api/families/F1/tree/999",
    Some(json!({ "name": "Ghost" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "error": "Tree member not found" }));
}

#[tokio::test]
async fn items_of_another_family_are_not_addressable() {
  let app = app().await;
  family(&app, "F1", "Alice").await;
  family(&app, "F2", "Eve").await;

  let (_, row) = call(
    &app,
    "POST",
    "/api/families/F1/tree",
    Some(json!({ "name": "Rose" })),
  )
  .await;
  let id = row["id"].as_i64().unwrap();

  let (status, _) =
    call(&app, "DELETE", &format!("/api/families/F2/tree/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(count(&app, "/api/families/F1/tree").await, 1);
}

#[tokio::test]
async fn adding_to_an_unknown_family_is_a_bad_request() {
  let app = app().await;
  let (status, body) = call(
    &app,
    "POST",
    "/api/families/GHOST/stories",
    Some(json!({ "title": "Lost", "content": "Nobody home" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Failed to add story");
}

#[tokio::test]
async fn non_numeric_item_id_is_a_bad_request_with_an_error_body() {
  let app = app().await;
  family(&app, "F1", "Alice").await;
  let (status, body) =
    call(&app, "DELETE", "/api/families/F1/tree/first", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string(), "{body}");
}

// ── Stories ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn deleted_story_disappears_and_second_delete_is_not_found() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  let (status, story) = call(
    &app,
    "POST",
    "/api/families/F1/stories",
    Some(json!({
      "title": "The flood",
      "author": "Grandpa",
      "content": "Water everywhere.",
      "tags": "weather",
      "createdBy": "Alice",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let uri = format!("/api/families/F1/stories/{}", story["id"]);

  let (status, _) = call(&app, "DELETE", &uri, None).await;
  assert_eq!(status, StatusCode::OK);

  let (_, stories) = call(&app, "GET", "/api/families/F1/stories", None).await;
  assert!(!stories.as_array().unwrap().iter().any(|s| s["id"] == story["id"]));

  let (status, body) = call(&app, "DELETE", &uri, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "error": "Story not found" }));
}

// ── Events ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn events_come_back_in_calendar_order() {
  let app = app().await;
  family(&app, "F1", "Alice").await;

  for (name, date) in [("Reunion", "2025-08-01"), ("Picnic", "2025-05-20")] {
    let (status, _) = call(
      &app,
      "POST",
      "/api/families/F1/events",
      Some(json!({ "name": name, "date": date, "createdBy": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
  }

  let (_, events) = call(&app, "GET", "/api/families/F1/events", None).await;
  let names: Vec<_> = events
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["name"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(names, ["Picnic", "Reunion"]);

  let (status, body) = call(
    &app,
    "PUT",
    "/api/families/F1/events/999",
    Some(json!({ "name": "Nothing", "date": "2025-01-01" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Event not found");
}
