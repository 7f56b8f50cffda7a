//! Entities of the "Family Legacy" variant.
//!
//! Every row hangs off a `families` row identified by a human-chosen
//! `family_code`. Authorship is a free-text name, not a reference.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::status::MemberRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
  pub id:          i64,
  pub family_code: String,
  pub created_at:  DateTime<Utc>,
}

/// Body of both "create family" and "join family".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRequest {
  pub family_code: Option<String>,
  pub user_name:   Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
  pub id:          i64,
  pub family_code: String,
  pub name:        String,
  pub role:        MemberRole,
  pub joined_at:   DateTime<Utc>,
}

// ─── Tree ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeMember {
  pub id:           i64,
  pub family_code:  String,
  pub name:         String,
  pub relationship: Option<String>,
  pub birth_date:   Option<NaiveDate>,
  pub bio:          Option<String>,
  pub created_by:   Option<String>,
  pub created_at:   DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTreeMember {
  pub name:         Option<String>,
  pub relationship: Option<String>,
  pub birth_date:   Option<NaiveDate>,
  pub bio:          Option<String>,
  pub created_by:   Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMemberUpdate {
  pub name:         Option<String>,
  pub relationship: Option<String>,
  pub birth_date:   Option<NaiveDate>,
  pub bio:          Option<String>,
}

// ─── Stories ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
  pub id:          i64,
  pub family_code: String,
  pub title:       String,
  pub author:      Option<String>,
  pub content:     String,
  /// Free text; clients usually send a comma-separated list.
  pub tags:        Option<String>,
  pub created_by:  Option<String>,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStory {
  pub title:      Option<String>,
  pub author:     Option<String>,
  pub content:    Option<String>,
  pub tags:       Option<String>,
  pub created_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryUpdate {
  pub title:   Option<String>,
  pub author:  Option<String>,
  pub content: Option<String>,
  pub tags:    Option<String>,
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyEvent {
  pub id:          i64,
  pub family_code: String,
  pub name:        String,
  pub date:        NaiveDate,
  pub location:    Option<String>,
  pub description: Option<String>,
  pub created_by:  Option<String>,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyEvent {
  pub name:        Option<String>,
  pub date:        Option<NaiveDate>,
  pub location:    Option<String>,
  pub description: Option<String>,
  pub created_by:  Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyEventUpdate {
  pub name:        Option<String>,
  pub date:        Option<NaiveDate>,
  pub location:    Option<String>,
  pub description: Option<String>,
}
