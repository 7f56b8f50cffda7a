//! SQLite implementation of [`LegacyStore`].

use std::path::Path;

use heirloom_core::{
  legacy::{
    Family, FamilyEvent, FamilyEventUpdate, FamilyMember, FamilyRequest,
    NewFamilyEvent, NewStory, NewTreeMember, Story, StoryUpdate, TreeMember,
    TreeMemberUpdate,
  },
  status::MemberRole,
  store::LegacyStore,
};
use rusqlite::Row;

use crate::{
  Result,
  connection::{self, execute, fetch_all, fetch_one, fetch_optional},
  encode::{encode_opt_date, get_date, get_dt, get_member_role, get_opt_date, now},
  schema::LEGACY_SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A "Family Legacy" store backed by a single SQLite file.
///
/// Clones share one connection thread.
#[derive(Clone)]
pub struct SqliteLegacyStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteLegacyStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connection::open(path.as_ref(), LEGACY_SCHEMA).await?;
    Ok(Self { conn })
  }

  /// Open a private in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = connection::open_in_memory(LEGACY_SCHEMA).await?;
    Ok(Self { conn })
  }

  /// Close the underlying connection. Other clones of this store fail every
  /// call afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn family_from_row(row: &Row<'_>) -> rusqlite::Result<Family> {
  Ok(Family {
    id:          row.get("id")?,
    family_code: row.get("family_code")?,
    created_at:  get_dt(row, "created_at")?,
  })
}

fn member_from_row(row: &Row<'_>) -> rusqlite::Result<FamilyMember> {
  Ok(FamilyMember {
    id:          row.get("id")?,
    family_code: row.get("family_code")?,
    name:        row.get("name")?,
    role:        get_member_role(row, "role")?,
    joined_at:   get_dt(row, "joined_at")?,
  })
}

fn tree_member_from_row(row: &Row<'_>) -> rusqlite::Result<TreeMember> {
  Ok(TreeMember {
    id:           row.get("id")?,
    family_code:  row.get("family_code")?,
    name:         row.get("name")?,
    relationship: row.get("relationship")?,
    birth_date:   get_opt_date(row, "birth_date")?,
    bio:          row.get("bio")?,
    created_by:   row.get("created_by")?,
    created_at:   get_dt(row, "created_at")?,
  })
}

fn story_from_row(row: &Row<'_>) -> rusqlite::Result<Story> {
  Ok(Story {
    id:          row.get("id")?,
    family_code: row.get("family_code")?,
    title:       row.get("title")?,
    author:      row.get("author")?,
    content:     row.get("content")?,
    tags:        row.get("tags")?,
    created_by:  row.get("created_by")?,
    created_at:  get_dt(row, "created_at")?,
  })
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<FamilyEvent> {
  Ok(FamilyEvent {
    id:          row.get("id")?,
    family_code: row.get("family_code")?,
    name:        row.get("name")?,
    date:        get_date(row, "date")?,
    location:    row.get("location")?,
    description: row.get("description")?,
    created_by:  row.get("created_by")?,
    created_at:  get_dt(row, "created_at")?,
  })
}

// ─── LegacyStore impl ────────────────────────────────────────────────────────

impl LegacyStore for SqliteLegacyStore {
  type Error = crate::Error;

  // ── Families ──────────────────────────────────────────────────────────────

  async fn create_family(&self, input: FamilyRequest) -> Result<Family> {
    let FamilyRequest { family_code, user_name } = input;
    let created_at = now();

    // Both rows commit together; dropping `tx` on any error rolls back.
    let family = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let family = tx.query_row(
          "INSERT INTO families (family_code, created_at)
           VALUES (?1, ?2)
           RETURNING *",
          (&family_code, &created_at),
          family_from_row,
        )?;
        tx.execute(
          "INSERT INTO family_members (family_code, name, role, joined_at)
           VALUES (?1, ?2, ?3, ?4)",
          (
            &family_code,
            &user_name,
            MemberRole::Admin.as_str(),
            &created_at,
          ),
        )?;
        tx.commit()?;
        Ok(family)
      })
      .await?;

    tracing::info!(family_code = %family.family_code, "family created");
    Ok(family)
  }

  async fn join_family(&self, input: FamilyRequest) -> Result<Option<FamilyMember>> {
    // The existence check is part of the insert itself: no row is produced
    // when the family is missing, even if it is deleted concurrently.
    fetch_optional(
      &self.conn,
      "INSERT INTO family_members (family_code, name, role, joined_at)
       SELECT family_code, ?2, ?3, ?4 FROM families WHERE family_code = ?1
       RETURNING *",
      (
        input.family_code,
        input.user_name,
        MemberRole::Member.as_str(),
        now(),
      ),
      member_from_row,
    )
    .await
  }

  async fn list_members(&self, family_code: &str) -> Result<Vec<FamilyMember>> {
    fetch_all(
      &self.conn,
      "SELECT * FROM family_members
       WHERE family_code = ?1
       ORDER BY joined_at DESC, id DESC",
      (family_code.to_owned(),),
      member_from_row,
    )
    .await
  }

  // ── Tree ──────────────────────────────────────────────────────────────────

  async fn list_tree(&self, family_code: &str) -> Result<Vec<TreeMember>> {
    fetch_all(
      &self.conn,
      "SELECT * FROM tree_members
       WHERE family_code = ?1
       ORDER BY created_at DESC, id DESC",
      (family_code.to_owned(),),
      tree_member_from_row,
    )
    .await
  }

  async fn add_tree_member(
    &self,
    family_code: &str,
    input: NewTreeMember,
  ) -> Result<TreeMember> {
    fetch_one(
      &self.conn,
      "INSERT INTO tree_members
         (family_code, name, relationship, birth_date, bio, created_by, created_at)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
       RETURNING *",
      (
        family_code.to_owned(),
        input.name,
        input.relationship,
        encode_opt_date(input.birth_date),
        input.bio,
        input.created_by,
        now(),
      ),
      tree_member_from_row,
    )
    .await
  }

  async fn update_tree_member(
    &self,
    family_code: &str,
    id: i64,
    input: TreeMemberUpdate,
  ) -> Result<Option<TreeMember>> {
    fetch_optional(
      &self.conn,
      "UPDATE tree_members
       SET name = ?1, relationship = ?2, birth_date = ?3, bio = ?4
       WHERE id = ?5 AND family_code = ?6
       RETURNING *",
      (
        input.name,
        input.relationship,
        encode_opt_date(input.birth_date),
        input.bio,
        id,
        family_code.to_owned(),
      ),
      tree_member_from_row,
    )
    .await
  }

  async fn delete_tree_member(&self, family_code: &str, id: i64) -> Result<bool> {
    let changed = execute(
      &self.conn,
      "DELETE FROM tree_members WHERE id = ?1 AND family_code = ?2",
      (id, family_code.to_owned()),
    )
    .await?;
    Ok(changed > 0)
  }

  // ── Stories ───────────────────────────────────────────────────────────────

  async fn list_stories(&self, family_code: &str) -> Result<Vec<Story>> {
    fetch_all(
      &self.conn,
      "SELECT * FROM stories
       WHERE family_code = ?1
       ORDER BY created_at DESC, id DESC",
      (family_code.to_owned(),),
      story_from_row,
    )
    .await
  }

  async fn add_story(&self, family_code: &str, input: NewStory) -> Result<Story> {
    fetch_one(
      &self.conn,
      "INSERT INTO stories
         (family_code, title, author, content, tags, created_by, created_at)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
       RETURNING *",
      (
        family_code.to_owned(),
        input.title,
        input.author,
        input.content,
        input.tags,
        input.created_by,
        now(),
      ),
      story_from_row,
    )
    .await
  }

  async fn update_story(
    &self,
    family_code: &str,
    id: i64,
    input: StoryUpdate,
  ) -> Result<Option<Story>> {
    fetch_optional(
      &self.conn,
      "UPDATE stories
       SET title = ?1, author = ?2, content = ?3, tags = ?4
       WHERE id = ?5 AND family_code = ?6
       RETURNING *",
      (
        input.title,
        input.author,
        input.content,
        input.tags,
        id,
        family_code.to_owned(),
      ),
      story_from_row,
    )
    .await
  }

  async fn delete_story(&self, family_code: &str, id: i64) -> Result<bool> {
    let changed = execute(
      &self.conn,
      "DELETE FROM stories WHERE id = ?1 AND family_code = ?2",
      (id, family_code.to_owned()),
    )
    .await?;
    Ok(changed > 0)
  }

  // ── Events ────────────────────────────────────────────────────────────────

  async fn list_events(&self, family_code: &str) -> Result<Vec<FamilyEvent>> {
    fetch_all(
      &self.conn,
      "SELECT * FROM events
       WHERE family_code = ?1
       ORDER BY date ASC, id ASC",
      (family_code.to_owned(),),
      event_from_row,
    )
    .await
  }

  async fn add_event(
    &self,
    family_code: &str,
    input: NewFamilyEvent,
  ) -> Result<FamilyEvent> {
    fetch_one(
      &self.conn,
      "INSERT INTO events
         (family_code, name, date, location, description, created_by, created_at)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
       RETURNING *",
      (
        family_code.to_owned(),
        input.name,
        encode_opt_date(input.date),
        input.location,
        input.description,
        input.created_by,
        now(),
      ),
      event_from_row,
    )
    .await
  }

  async fn update_event(
    &self,
    family_code: &str,
    id: i64,
    input: FamilyEventUpdate,
  ) -> Result<Option<FamilyEvent>> {
    fetch_optional(
      &self.conn,
      "UPDATE events
       SET name = ?1, date = ?2, location = ?3, description = ?4
       WHERE id = ?5 AND family_code = ?6
       RETURNING *",
      (
        input.name,
        encode_opt_date(input.date),
        input.location,
        input.description,
        id,
        family_code.to_owned(),
      ),
      event_from_row,
    )
    .await
  }

  async fn delete_event(&self, family_code: &str, id: i64) -> Result<bool> {
    let changed = execute(
      &self.conn,
      "DELETE FROM events WHERE id = ?1 AND family_code = ?2",
      (id, family_code.to_owned()),
    )
    .await?;
    Ok(changed > 0)
  }
}
