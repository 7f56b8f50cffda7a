use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{Router, http::StatusCode};
use heirloom_store_sqlite::SqliteHarmonyStore;
use serde_json::{Value, json};

use super::call;
use crate::harmony_router;

async fn app() -> (Router, SqliteHarmonyStore) {
  let store = SqliteHarmonyStore::open_in_memory().await.unwrap();
  let app = Router::new().nest("/api", harmony_router(Arc::new(store.clone())));
  (app, store)
}

async fn register(app: &Router, name: &str, email: &str) -> i64 {
  let (status, user) = call(
    app,
    "POST",
    "/api/users/register",
    Some(json!({ "name": name, "email": email, "password": "hunter22" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK, "{user}");
  user["UserID"].as_i64().unwrap()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_names_the_service() {
  let (app, _) = app().await;
  let (status, body) = call(&app, "GET", "/api/health", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "ok", "message": "Project Harmony API is running" }));
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_returns_public_columns_and_stores_a_verifiable_hash() {
  let (app, store) = app().await;
  let (status, user) = call(
    &app,
    "POST",
    "/api/users/register",
    Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "correct horse" })),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(user["Name"], "Ada");
  assert_eq!(user["Email"], "ada@example.com");
  assert_eq!(user["Role"], "Member");
  assert_eq!(user["Status"], "Pending");
  assert!(user["UserID"].is_i64());
  assert!(user.get("Password_Hash").is_none(), "hash leaked: {user}");

  let stored = store.password_hash("ada@example.com").await.unwrap().unwrap();
  let parsed = PasswordHash::new(&stored).unwrap();
  assert!(Argon2::default().verify_password(b"correct horse", &parsed).is_ok());
  assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_and_count_is_unchanged() {
  let (app, _) = app().await;
  register(&app, "Ada", "ada@example.com").await;

  let (status, body) = call(
    &app,
    "POST",
    "/api/users/register",
    Some(json!({ "name": "Imposter", "email": "ada@example.com", "password": "x" })),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body, json!({ "error": "Failed to register user" }));

  let (_, users) = call(&app, "GET", "/api/users", None).await;
  assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn register_without_password_is_a_bad_request() {
  let (app, _) = app().await;
  let (status, body) = call(
    &app,
    "POST",
    "/api/users/register",
    Some(json!({ "name": "Ada", "email": "ada@example.com" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Failed to register user");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request_with_an_error_body() {
  let (app, _) = app().await;
  let (status, body) =
    call(&app, "POST", "/api/people", Some(json!("not an object"))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request_with_an_error_body() {
  let (app, _) = app().await;
  let (status, body) = call(&app, "GET", "/api/albums/abc/items", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string(), "{body}");

  let (status, body) = call(
    &app,
    "PUT",
    "/api/people/1/tributes/x/status",
    Some(json!({ "status": "Hidden" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string(), "{body}");
}

// ── People ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn people_are_listed_by_name() {
  let (app, _) = app().await;
  for name in ["Zelda", "Abe"] {
    let (status, _) =
      call(&app, "POST", "/api/people", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK);
  }

  let (_, people) = call(&app, "GET", "/api/people", None).await;
  let names: Vec<_> = people
    .as_array()
    .unwrap()
    .iter()
    .map(|p| p["Name"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(names, ["Abe", "Zelda"]);
}

#[tokio::test]
async fn person_update_replaces_fields() {
  let (app, _) = app().await;
  let (_, person) = call(
    &app,
    "POST",
    "/api/people",
    Some(json!({ "name": "Abe", "birthDate": "1901-02-03", "biography": "Farmer" })),
  )
  .await;
  assert_eq!(person["BirthDate"], "1901-02-03");
  let id = person["PersonID"].as_i64().unwrap();

  let (status, updated) = call(
    &app,
    "PUT",
    &format!("/api/people/{id}"),
    Some(json!({ "name": "Abraham", "deathDate": "1980-12-31" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["Name"], "Abraham");
  assert_eq!(updated["BirthDate"], Value::Null);
  assert_eq!(updated["DeathDate"], "1980-12-31");
  assert_eq!(updated["Biography"], Value::Null);
}

#[tokio::test]
async fn updating_a_missing_person_succeeds_with_null() {
  let (app, _) = app().await;
  let (status, body) =
    call(&app, "PUT", "/api/people/999", Some(json!({ "name": "Nobody" }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn person_without_name_is_a_bad_request() {
  let (app, _) = app().await;
  let (status, body) =
    call(&app, "POST", "/api/people", Some(json!({ "biography": "?" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Failed to add person");
}

// ── Relationships ────────────────────────────────────────────────────────────

#[tokio::test]
async fn relationship_to_unknown_person_is_rejected() {
  let (app, _) = app().await;
  let (_, abe) = call(&app, "POST", "/api/people", Some(json!({ "name": "Abe" }))).await;
  let abe = abe["PersonID"].as_i64().unwrap();

  let (status, rel) = call(
    &app,
    "POST",
    "/api/relationships",
    Some(json!({ "person1Id": abe, "person2Id": abe, "relationshipType": "Self" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(rel["Person1_ID"], abe);

  let (status, body) = call(
    &app,
    "POST",
    "/api/relationships",
    Some(json!({ "person1Id": abe, "person2Id": abe + 100, "relationshipType": "Parent" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "Failed to add relationship");

  let (_, all) = call(&app, "GET", "/api/relationships", None).await;
  assert_eq!(all.as_array().unwrap().len(), 1);
}

// ── Timeline ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn timeline_lists_only_visible_events_latest_first() {
  let (app, _) = app().await;
  let user = register(&app, "Ada", "ada@example.com").await;

  let mut ids = Vec::new();
  for (date, title) in [("1990-06-01", "Wedding"), ("2001-09-14", "Move")] {
    let (status, event) = call(
      &app,
      "POST",
      "/api/timeline",
      Some(json!({ "eventDate": date, "title": title, "createdByUserId": user })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["Post_Status"], "Visible");
    ids.push(event["EventID"].as_i64().unwrap());
  }

  let (_, events) = call(&app, "GET", "/api/timeline", None).await;
  let titles: Vec<_> = events
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["Title"].as_str().unwrap().to_owned())
    .collect();
  assert_eq!(titles, ["Move", "Wedding"]);

  let (status, hidden) = call(
    &app,
    "PUT",
    &format!("/api/timeline/{}/status", ids[1]),
    Some(json!({ "status": "Hidden" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(hidden["Post_Status"], "Hidden");

  let (_, events) = call(&app, "GET", "/api/timeline", None).await;
  let events = events.as_array().unwrap();
  assert_eq!(events.len(), 1);
  assert!(events.iter().all(|e| e["Post_Status"] == "Visible"));
}

#[tokio::test]
async fn moderating_a_missing_event_is_not_found() {
  let (app, _) = app().await;
  let (status, body) = call(
    &app,
    "PUT",
    "/api/timeline/42/status",
    Some(json!({ "status": "Flagged" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Timeline event not found");
}

#[tokio::test]
async fn unknown_status_value_is_a_bad_request() {
  let (app, _) = app().await;
  let (status, _) = call(
    &app,
    "PUT",
    "/api/timeline/1/status",
    Some(json!({ "status": "Deleted" })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Media ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn album_items_are_scoped_and_moderated_per_album() {
  let (app, _) = app().await;
  let user = register(&app, "Ada", "ada@example.com").await;

  let mut albums = Vec::new();
  for name in ["Summer", "Winter"] {
    let (status, album) = call(
      &app,
      "POST",
      "/api/albums",
      Some(json!({ "albumName": name, "createdByUserId": user })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    albums.push(album["AlbumID"].as_i64().unwrap());
  }

  let (status, item) = call(
    &app,
    "POST",
    &format!("/api/albums/{}/items", albums[0]),
    Some(json!({
      "uploadedByUserId": user,
      "fileUrl": "https://img.example.com/beach.jpg",
      "descriptionCaption": "Beach",
      "dateTaken": "2019-07-04",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(item["Post_Status"], "Visible");
  let item_id = item["ItemID"].as_i64().unwrap();

  let (_, winter) =
    call(&app, "GET", &format!("/api/albums/{}/items", albums[1]), None).await;
  assert!(winter.as_array().unwrap().is_empty());

  // Wrong album: the item is not addressed.
  let (status, _) = call(
    &app,
    "PUT",
    &format!("/api/albums/{}/items/{item_id}/status", albums[1]),
    Some(json!({ "status": "Hidden" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = call(
    &app,
    "PUT",
    &format!("/api/albums/{}/items/{item_id}/status", albums[0]),
    Some(json!({ "status": "Hidden" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, summer) =
    call(&app, "GET", &format!("/api/albums/{}/items", albums[0]), None).await;
  assert!(summer.as_array().unwrap().is_empty());
}

// ── Tributes ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn tributes_can_be_posted_and_flagged() {
  let (app, _) = app().await;
  let user = register(&app, "Ada", "ada@example.com").await;
  let (_, person) = call(
    &app,
    "POST",
    "/api/people",
    Some(json!({ "name": "Grandma", "deathDate": "2020-03-01" })),
  )
  .await;
  let person = person["PersonID"].as_i64().unwrap();

  let (status, tribute) = call(
    &app,
    "POST",
    &format!("/api/people/{person}/tributes"),
    Some(json!({ "postedByUserId": user, "tributeContent": "We miss you." })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(tribute["Deceased_PersonID"], person);
  let tribute_id = tribute["TributeID"].as_i64().unwrap();

  let (_, listed) =
    call(&app, "GET", &format!("/api/people/{person}/tributes"), None).await;
  assert_eq!(listed.as_array().unwrap().len(), 1);

  let (status, flagged) = call(
    &app,
    "PUT",
    &format!("/api/people/{person}/tributes/{tribute_id}/status"),
    Some(json!({ "status": "Flagged" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(flagged["Post_Status"], "Flagged");

  let (_, listed) =
    call(&app, "GET", &format!("/api/people/{person}/tributes"), None).await;
  assert!(listed.as_array().unwrap().is_empty());
}

// ── Groups ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn groups_default_to_secret_and_reject_duplicate_members() {
  let (app, _) = app().await;
  let user = register(&app, "Ada", "ada@example.com").await;

  let (status, group) = call(
    &app,
    "POST",
    "/api/groups",
    Some(json!({ "groupName": "Cousins", "createdByUserId": user })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(group["GroupType"], "Secret");
  let group = group["GroupID"].as_i64().unwrap();

  let uri = format!("/api/groups/{group}/members");
  let (status, _) = call(&app, "POST", &uri, Some(json!({ "userId": user }))).await;
  assert_eq!(status, StatusCode::OK);

  let (status, body) = call(&app, "POST", &uri, Some(json!({ "userId": user }))).await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["error"], "Failed to add group member");

  let (_, members) = call(&app, "GET", &uri, None).await;
  assert_eq!(members.as_array().unwrap().len(), 1);
}

// ── Invites ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invite_can_be_denied_with_a_reason() {
  let (app, _) = app().await;
  let user = register(&app, "Ada", "ada@example.com").await;

  let (status, invite) = call(
    &app,
    "POST",
    "/api/invites",
    Some(json!({
      "invitedByUserId": user,
      "inviteeEmail": "bob@example.com",
      "status": "Pending",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let id = invite["InviteID"].as_i64().unwrap();

  let (status, denied) = call(
    &app,
    "PUT",
    &format!("/api/invites/{id}"),
    Some(json!({ "status": "Denied", "denialReason": "Unknown person" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(denied["Status"], "Denied");
  assert_eq!(denied["Denial_Reason"], "Unknown person");

  let (status, missing) = call(
    &app,
    "PUT",
    &format!("/api/invites/{}", id + 1),
    Some(json!({ "status": "Approved" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(missing, Value::Null);
}

// ── Messages ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn messages_reach_the_recipient_inbox_and_can_be_marked_read() {
  let (app, _) = app().await;
  let ada = register(&app, "Ada", "ada@example.com").await;
  let bob = register(&app, "Bob", "bob@example.com").await;

  let (status, message) = call(
    &app,
    "POST",
    "/api/messages",
    Some(json!({ "senderUserId": ada, "recipientUserId": bob, "messageContent": "Hi!" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(message["Message_Status"], "Sent");
  let id = message["MessageID"].as_i64().unwrap();

  let (_, inbox) = call(&app, "GET", &format!("/api/users/{bob}/messages"), None).await;
  assert_eq!(inbox.as_array().unwrap().len(), 1);
  let (_, outbox) = call(&app, "GET", &format!("/api/users/{ada}/messages"), None).await;
  assert!(outbox.as_array().unwrap().is_empty());

  let (status, read) = call(
    &app,
    "PUT",
    &format!("/api/messages/{id}/status"),
    Some(json!({ "status": "Read" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(read["Message_Status"], "Read");
}
