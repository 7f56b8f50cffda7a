//! Entities of the "Project Harmony" variant.
//!
//! Rows serialise with the column names clients already consume
//! (`"UserID"`, `"Post_Status"`, …). Input types deserialise from the
//! camelCase request bodies and double as store inputs; their fields are
//! optional so that missing values are rejected by the store's own
//! constraints rather than by the HTTP layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{MessageStatus, PostStatus};

// ─── Users ───────────────────────────────────────────────────────────────────

/// Public projection of a user row. The password hash never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  #[serde(rename = "UserID")]
  pub user_id: i64,
  #[serde(rename = "Name")]
  pub name:    String,
  #[serde(rename = "Email")]
  pub email:   String,
  /// `Member` unless set otherwise at the store.
  #[serde(rename = "Role")]
  pub role:    String,
  /// `Pending` unless set otherwise at the store.
  #[serde(rename = "Status")]
  pub status:  String,
}

/// Input to [`crate::store::HarmonyStore::register_user`]. The password has
/// already been hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name:          Option<String>,
  pub email:         Option<String>,
  pub password_hash: String,
}

// ─── Invites ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invite {
  #[serde(rename = "InviteID")]
  pub invite_id:          i64,
  #[serde(rename = "InvitedBy_UserID")]
  pub invited_by_user_id: i64,
  #[serde(rename = "Invitee_Email")]
  pub invitee_email:      String,
  #[serde(rename = "Status")]
  pub status:             String,
  #[serde(rename = "Denial_Reason")]
  pub denial_reason:      Option<String>,
  #[serde(rename = "Created_At")]
  pub created_at:         DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvite {
  pub invited_by_user_id: Option<i64>,
  pub invitee_email:      Option<String>,
  pub status:             Option<String>,
}

/// Full replacement of the mutable invite fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUpdate {
  pub status:        Option<String>,
  pub denial_reason: Option<String>,
}

// ─── Groups ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
  #[serde(rename = "GroupID")]
  pub group_id:           i64,
  #[serde(rename = "GroupName")]
  pub group_name:         String,
  #[serde(rename = "GroupType")]
  pub group_type:         String,
  #[serde(rename = "CreatedBy_UserID")]
  pub created_by_user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
  pub group_name:         Option<String>,
  /// Falls back to `Secret` when absent.
  pub group_type:         Option<String>,
  pub created_by_user_id: Option<i64>,
}

/// A row of the `Group_Member` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
  #[serde(rename = "GroupID")]
  pub group_id: i64,
  #[serde(rename = "UserID")]
  pub user_id:  i64,
}

// ─── Family tree ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  #[serde(rename = "PersonID")]
  pub person_id:       i64,
  #[serde(rename = "Name")]
  pub name:            String,
  #[serde(rename = "BirthDate")]
  pub birth_date:      Option<NaiveDate>,
  #[serde(rename = "DeathDate")]
  pub death_date:      Option<NaiveDate>,
  #[serde(rename = "Biography")]
  pub biography:       Option<String>,
  /// Set when this person also has an account.
  #[serde(rename = "Profile_UserID")]
  pub profile_user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
  pub name:            Option<String>,
  pub birth_date:      Option<NaiveDate>,
  pub death_date:      Option<NaiveDate>,
  pub biography:       Option<String>,
  pub profile_user_id: Option<i64>,
}

/// Full replacement of a person's scalar fields. The linked profile is not
/// part of an update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
  pub name:       Option<String>,
  pub birth_date: Option<NaiveDate>,
  pub death_date: Option<NaiveDate>,
  pub biography:  Option<String>,
}

/// An edge between two people. Nothing prevents duplicate, contradictory or
/// self-referencing edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
  #[serde(rename = "RelationshipID")]
  pub relationship_id:   i64,
  #[serde(rename = "Person1_ID")]
  pub person1_id:        i64,
  #[serde(rename = "Person2_ID")]
  pub person2_id:        i64,
  #[serde(rename = "RelationshipType")]
  pub relationship_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRelationship {
  pub person1_id:        Option<i64>,
  pub person2_id:        Option<i64>,
  pub relationship_type: Option<String>,
}

// ─── Media ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAlbum {
  #[serde(rename = "AlbumID")]
  pub album_id:           i64,
  #[serde(rename = "AlbumName")]
  pub album_name:         String,
  #[serde(rename = "Description")]
  pub description:        Option<String>,
  #[serde(rename = "CreatedBy_UserID")]
  pub created_by_user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaAlbum {
  pub album_name:         Option<String>,
  pub description:        Option<String>,
  pub created_by_user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
  #[serde(rename = "ItemID")]
  pub item_id:             i64,
  #[serde(rename = "AlbumID")]
  pub album_id:            i64,
  #[serde(rename = "UploadedBy_UserID")]
  pub uploaded_by_user_id: i64,
  #[serde(rename = "File_URL")]
  pub file_url:            String,
  #[serde(rename = "Description_Caption")]
  pub description_caption: Option<String>,
  #[serde(rename = "Date_Taken")]
  pub date_taken:          Option<NaiveDate>,
  #[serde(rename = "Post_Status")]
  pub post_status:         PostStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItem {
  pub uploaded_by_user_id: Option<i64>,
  pub file_url:            Option<String>,
  pub description_caption: Option<String>,
  pub date_taken:          Option<NaiveDate>,
}

// ─── Timeline ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
  #[serde(rename = "EventID")]
  pub event_id:           i64,
  #[serde(rename = "EventDate")]
  pub event_date:         NaiveDate,
  #[serde(rename = "Title")]
  pub title:              String,
  #[serde(rename = "Story")]
  pub story:              Option<String>,
  #[serde(rename = "CreatedBy_UserID")]
  pub created_by_user_id: i64,
  #[serde(rename = "Post_Status")]
  pub post_status:        PostStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimelineEvent {
  pub event_date:         Option<NaiveDate>,
  pub title:              Option<String>,
  pub story:              Option<String>,
  pub created_by_user_id: Option<i64>,
}

// ─── Messages ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectMessage {
  #[serde(rename = "MessageID")]
  pub message_id:        i64,
  #[serde(rename = "Sender_UserID")]
  pub sender_user_id:    i64,
  #[serde(rename = "Recipient_UserID")]
  pub recipient_user_id: i64,
  #[serde(rename = "Message_Content")]
  pub message_content:   String,
  /// Server-assigned; never changes after creation.
  #[serde(rename = "Timestamp")]
  pub timestamp:         DateTime<Utc>,
  #[serde(rename = "Message_Status")]
  pub message_status:    MessageStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDirectMessage {
  pub sender_user_id:    Option<i64>,
  pub recipient_user_id: Option<i64>,
  pub message_content:   Option<String>,
}

// ─── Memorials ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorialTribute {
  #[serde(rename = "TributeID")]
  pub tribute_id:         i64,
  #[serde(rename = "Deceased_PersonID")]
  pub deceased_person_id: i64,
  #[serde(rename = "PostedBy_UserID")]
  pub posted_by_user_id:  i64,
  #[serde(rename = "Tribute_Content")]
  pub tribute_content:    String,
  #[serde(rename = "Timestamp")]
  pub timestamp:          DateTime<Utc>,
  #[serde(rename = "Post_Status")]
  pub post_status:        PostStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemorialTribute {
  pub posted_by_user_id: Option<i64>,
  pub tribute_content:   Option<String>,
}
