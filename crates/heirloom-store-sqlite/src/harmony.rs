//! [`SqliteHarmonyStore`] — the SQLite implementation of [`HarmonyStore`].

use std::path::Path;

use heirloom_core::{
  harmony::{
    DirectMessage, Group, GroupMember, Invite, InviteUpdate, MediaAlbum,
    MediaItem, MemorialTribute, NewDirectMessage, NewGroup, NewInvite,
    NewMediaAlbum, NewMediaItem, NewMemorialTribute, NewPerson,
    NewRelationship, NewTimelineEvent, NewUser, Person, PersonUpdate,
    Relationship, TimelineEvent, User,
  },
  status::{MessageStatus, PostStatus},
  store::HarmonyStore,
};
use rusqlite::Row;

use crate::{
  Result,
  connection::{self, fetch_all, fetch_one, fetch_optional},
  encode::{
    encode_opt_date, get_date, get_dt, get_message_status, get_opt_date,
    get_post_status, now,
  },
  schema::HARMONY_SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A "Project Harmony" store backed by a single SQLite file.
///
/// Clones share one connection thread.
#[derive(Clone)]
pub struct SqliteHarmonyStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteHarmonyStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = connection::open(path.as_ref(), HARMONY_SCHEMA).await?;
    Ok(Self { conn })
  }

  /// Open a private in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = connection::open_in_memory(HARMONY_SCHEMA).await?;
    Ok(Self { conn })
  }

  /// Close the underlying connection. Other clones of this store fail every
  /// call afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  /// The stored password hash for `email`, if such a user exists.
  ///
  /// Not part of [`HarmonyStore`]: no route exposes credentials.
  pub async fn password_hash(&self, email: &str) -> Result<Option<String>> {
    fetch_optional(
      &self.conn,
      r#"SELECT "Password_Hash" FROM "User" WHERE "Email" = ?1"#,
      (email.to_owned(),),
      |row| row.get(0),
    )
    .await
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    user_id: row.get("UserID")?,
    name:    row.get("Name")?,
    email:   row.get("Email")?,
    role:    row.get("Role")?,
    status:  row.get("Status")?,
  })
}

fn invite_from_row(row: &Row<'_>) -> rusqlite::Result<Invite> {
  Ok(Invite {
    invite_id:          row.get("InviteID")?,
    invited_by_user_id: row.get("InvitedBy_UserID")?,
    invitee_email:      row.get("Invitee_Email")?,
    status:             row.get("Status")?,
    denial_reason:      row.get("Denial_Reason")?,
    created_at:         get_dt(row, "Created_At")?,
  })
}

fn group_from_row(row: &Row<'_>) -> rusqlite::Result<Group> {
  Ok(Group {
    group_id:           row.get("GroupID")?,
    group_name:         row.get("GroupName")?,
    group_type:         row.get("GroupType")?,
    created_by_user_id: row.get("CreatedBy_UserID")?,
  })
}

fn group_member_from_row(row: &Row<'_>) -> rusqlite::Result<GroupMember> {
  Ok(GroupMember {
    group_id: row.get("GroupID")?,
    user_id:  row.get("UserID")?,
  })
}

fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    person_id:       row.get("PersonID")?,
    name:            row.get("Name")?,
    birth_date:      get_opt_date(row, "BirthDate")?,
    death_date:      get_opt_date(row, "DeathDate")?,
    biography:       row.get("Biography")?,
    profile_user_id: row.get("Profile_UserID")?,
  })
}

fn relationship_from_row(row: &Row<'_>) -> rusqlite::Result<Relationship> {
  Ok(Relationship {
    relationship_id:   row.get("RelationshipID")?,
    person1_id:        row.get("Person1_ID")?,
    person2_id:        row.get("Person2_ID")?,
    relationship_type: row.get("RelationshipType")?,
  })
}

fn timeline_event_from_row(row: &Row<'_>) -> rusqlite::Result<TimelineEvent> {
  Ok(TimelineEvent {
    event_id:           row.get("EventID")?,
    event_date:         get_date(row, "EventDate")?,
    title:              row.get("Title")?,
    story:              row.get("Story")?,
    created_by_user_id: row.get("CreatedBy_UserID")?,
    post_status:        get_post_status(row, "Post_Status")?,
  })
}

fn album_from_row(row: &Row<'_>) -> rusqlite::Result<MediaAlbum> {
  Ok(MediaAlbum {
    album_id:           row.get("AlbumID")?,
    album_name:         row.get("AlbumName")?,
    description:        row.get("Description")?,
    created_by_user_id: row.get("CreatedBy_UserID")?,
  })
}

fn media_item_from_row(row: &Row<'_>) -> rusqlite::Result<MediaItem> {
  Ok(MediaItem {
    item_id:             row.get("ItemID")?,
    album_id:            row.get("AlbumID")?,
    uploaded_by_user_id: row.get("UploadedBy_UserID")?,
    file_url:            row.get("File_URL")?,
    description_caption: row.get("Description_Caption")?,
    date_taken:          get_opt_date(row, "Date_Taken")?,
    post_status:         get_post_status(row, "Post_Status")?,
  })
}

fn tribute_from_row(row: &Row<'_>) -> rusqlite::Result<MemorialTribute> {
  Ok(MemorialTribute {
    tribute_id:         row.get("TributeID")?,
    deceased_person_id: row.get("Deceased_PersonID")?,
    posted_by_user_id:  row.get("PostedBy_UserID")?,
    tribute_content:    row.get("Tribute_Content")?,
    timestamp:          get_dt(row, "Timestamp")?,
    post_status:        get_post_status(row, "Post_Status")?,
  })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<DirectMessage> {
  Ok(DirectMessage {
    message_id:        row.get("MessageID")?,
    sender_user_id:    row.get("Sender_UserID")?,
    recipient_user_id: row.get("Recipient_UserID")?,
    message_content:   row.get("Message_Content")?,
    timestamp:         get_dt(row, "Timestamp")?,
    message_status:    get_message_status(row, "Message_Status")?,
  })
}

// ─── HarmonyStore impl ───────────────────────────────────────────────────────

const VISIBLE: &str = "Visible";

impl HarmonyStore for SqliteHarmonyStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn register_user(&self, input: NewUser) -> Result<User> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "User" ("Name", "Email", "Password_Hash")
         VALUES (?1, ?2, ?3)
         RETURNING "UserID", "Name", "Email", "Role", "Status""#,
      (input.name, input.email, input.password_hash),
      user_from_row,
    )
    .await
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    fetch_all(
      &self.conn,
      r#"SELECT "UserID", "Name", "Email", "Role", "Status"
         FROM "User" ORDER BY "UserID""#,
      (),
      user_from_row,
    )
    .await
  }

  // ── Invites ───────────────────────────────────────────────────────────────

  async fn list_invites(&self) -> Result<Vec<Invite>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Invite" ORDER BY "Created_At" DESC, "InviteID" DESC"#,
      (),
      invite_from_row,
    )
    .await
  }

  async fn add_invite(&self, input: NewInvite) -> Result<Invite> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Invite" ("InvitedBy_UserID", "Invitee_Email", "Status", "Created_At")
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *"#,
      (
        input.invited_by_user_id,
        input.invitee_email,
        input.status,
        now(),
      ),
      invite_from_row,
    )
    .await
  }

  async fn update_invite(
    &self,
    invite_id: i64,
    input: InviteUpdate,
  ) -> Result<Option<Invite>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Invite" SET "Status" = ?1, "Denial_Reason" = ?2
         WHERE "InviteID" = ?3
         RETURNING *"#,
      (input.status, input.denial_reason, invite_id),
      invite_from_row,
    )
    .await
  }

  // ── Groups ────────────────────────────────────────────────────────────────

  async fn list_groups(&self) -> Result<Vec<Group>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Group" ORDER BY "GroupID""#,
      (),
      group_from_row,
    )
    .await
  }

  async fn add_group(&self, input: NewGroup) -> Result<Group> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Group" ("GroupName", "GroupType", "CreatedBy_UserID")
         VALUES (?1, COALESCE(?2, 'Secret'), ?3)
         RETURNING *"#,
      (input.group_name, input.group_type, input.created_by_user_id),
      group_from_row,
    )
    .await
  }

  async fn list_group_members(&self, group_id: i64) -> Result<Vec<GroupMember>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Group_Member" WHERE "GroupID" = ?1 ORDER BY "UserID""#,
      (group_id,),
      group_member_from_row,
    )
    .await
  }

  async fn add_group_member(
    &self,
    group_id: i64,
    user_id: Option<i64>,
  ) -> Result<GroupMember> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Group_Member" ("GroupID", "UserID")
         VALUES (?1, ?2)
         RETURNING *"#,
      (group_id, user_id),
      group_member_from_row,
    )
    .await
  }

  // ── People and relationships ──────────────────────────────────────────────

  async fn list_people(&self) -> Result<Vec<Person>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Person" ORDER BY "Name", "PersonID""#,
      (),
      person_from_row,
    )
    .await
  }

  async fn add_person(&self, input: NewPerson) -> Result<Person> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Person" ("Name", "BirthDate", "DeathDate", "Biography", "Profile_UserID")
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING *"#,
      (
        input.name,
        encode_opt_date(input.birth_date),
        encode_opt_date(input.death_date),
        input.biography,
        input.profile_user_id,
      ),
      person_from_row,
    )
    .await
  }

  async fn update_person(
    &self,
    person_id: i64,
    input: PersonUpdate,
  ) -> Result<Option<Person>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Person"
         SET "Name" = ?1, "BirthDate" = ?2, "DeathDate" = ?3, "Biography" = ?4
         WHERE "PersonID" = ?5
         RETURNING *"#,
      (
        input.name,
        encode_opt_date(input.birth_date),
        encode_opt_date(input.death_date),
        input.biography,
        person_id,
      ),
      person_from_row,
    )
    .await
  }

  async fn list_relationships(&self) -> Result<Vec<Relationship>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Relationship" ORDER BY "RelationshipID""#,
      (),
      relationship_from_row,
    )
    .await
  }

  async fn add_relationship(&self, input: NewRelationship) -> Result<Relationship> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Relationship" ("Person1_ID", "Person2_ID", "RelationshipType")
         VALUES (?1, ?2, ?3)
         RETURNING *"#,
      (input.person1_id, input.person2_id, input.relationship_type),
      relationship_from_row,
    )
    .await
  }

  // ── Timeline ──────────────────────────────────────────────────────────────

  async fn list_timeline(&self) -> Result<Vec<TimelineEvent>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Timeline_Event"
         WHERE "Post_Status" = ?1
         ORDER BY "EventDate" DESC, "EventID" DESC"#,
      (VISIBLE,),
      timeline_event_from_row,
    )
    .await
  }

  async fn add_timeline_event(&self, input: NewTimelineEvent) -> Result<TimelineEvent> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Timeline_Event" ("EventDate", "Title", "Story", "CreatedBy_UserID")
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *"#,
      (
        encode_opt_date(input.event_date),
        input.title,
        input.story,
        input.created_by_user_id,
      ),
      timeline_event_from_row,
    )
    .await
  }

  async fn set_timeline_event_status(
    &self,
    event_id: i64,
    status: PostStatus,
  ) -> Result<Option<TimelineEvent>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Timeline_Event" SET "Post_Status" = ?1
         WHERE "EventID" = ?2
         RETURNING *"#,
      (status.as_str(), event_id),
      timeline_event_from_row,
    )
    .await
  }

  // ── Media ─────────────────────────────────────────────────────────────────

  async fn list_albums(&self) -> Result<Vec<MediaAlbum>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Media_Album" ORDER BY "AlbumID""#,
      (),
      album_from_row,
    )
    .await
  }

  async fn add_album(&self, input: NewMediaAlbum) -> Result<MediaAlbum> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Media_Album" ("AlbumName", "Description", "CreatedBy_UserID")
         VALUES (?1, ?2, ?3)
         RETURNING *"#,
      (input.album_name, input.description, input.created_by_user_id),
      album_from_row,
    )
    .await
  }

  async fn list_media_items(&self, album_id: i64) -> Result<Vec<MediaItem>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Media_Item"
         WHERE "AlbumID" = ?1 AND "Post_Status" = ?2
         ORDER BY "ItemID""#,
      (album_id, VISIBLE),
      media_item_from_row,
    )
    .await
  }

  async fn add_media_item(&self, album_id: i64, input: NewMediaItem) -> Result<MediaItem> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Media_Item"
           ("AlbumID", "UploadedBy_UserID", "File_URL", "Description_Caption", "Date_Taken")
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING *"#,
      (
        album_id,
        input.uploaded_by_user_id,
        input.file_url,
        input.description_caption,
        encode_opt_date(input.date_taken),
      ),
      media_item_from_row,
    )
    .await
  }

  async fn set_media_item_status(
    &self,
    album_id: i64,
    item_id: i64,
    status: PostStatus,
  ) -> Result<Option<MediaItem>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Media_Item" SET "Post_Status" = ?1
         WHERE "ItemID" = ?2 AND "AlbumID" = ?3
         RETURNING *"#,
      (status.as_str(), item_id, album_id),
      media_item_from_row,
    )
    .await
  }

  // ── Memorial tributes ─────────────────────────────────────────────────────

  async fn list_tributes(&self, person_id: i64) -> Result<Vec<MemorialTribute>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Memorial_Tribute"
         WHERE "Deceased_PersonID" = ?1 AND "Post_Status" = ?2
         ORDER BY "Timestamp" DESC, "TributeID" DESC"#,
      (person_id, VISIBLE),
      tribute_from_row,
    )
    .await
  }

  async fn add_tribute(
    &self,
    person_id: i64,
    input: NewMemorialTribute,
  ) -> Result<MemorialTribute> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Memorial_Tribute"
           ("Deceased_PersonID", "PostedBy_UserID", "Tribute_Content", "Timestamp")
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *"#,
      (person_id, input.posted_by_user_id, input.tribute_content, now()),
      tribute_from_row,
    )
    .await
  }

  async fn set_tribute_status(
    &self,
    person_id: i64,
    tribute_id: i64,
    status: PostStatus,
  ) -> Result<Option<MemorialTribute>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Memorial_Tribute" SET "Post_Status" = ?1
         WHERE "TributeID" = ?2 AND "Deceased_PersonID" = ?3
         RETURNING *"#,
      (status.as_str(), tribute_id, person_id),
      tribute_from_row,
    )
    .await
  }

  // ── Direct messages ───────────────────────────────────────────────────────

  async fn list_messages_for(&self, recipient_id: i64) -> Result<Vec<DirectMessage>> {
    fetch_all(
      &self.conn,
      r#"SELECT * FROM "Direct_Message"
         WHERE "Recipient_UserID" = ?1
         ORDER BY "Timestamp" DESC, "MessageID" DESC"#,
      (recipient_id,),
      message_from_row,
    )
    .await
  }

  async fn send_message(&self, input: NewDirectMessage) -> Result<DirectMessage> {
    fetch_one(
      &self.conn,
      r#"INSERT INTO "Direct_Message"
           ("Sender_UserID", "Recipient_UserID", "Message_Content", "Timestamp")
         VALUES (?1, ?2, ?3, ?4)
         RETURNING *"#,
      (
        input.sender_user_id,
        input.recipient_user_id,
        input.message_content,
        now(),
      ),
      message_from_row,
    )
    .await
  }

  async fn set_message_status(
    &self,
    message_id: i64,
    status: MessageStatus,
  ) -> Result<Option<DirectMessage>> {
    fetch_optional(
      &self.conn,
      r#"UPDATE "Direct_Message" SET "Message_Status" = ?1
         WHERE "MessageID" = ?2
         RETURNING *"#,
      (status.as_str(), message_id),
      message_from_row,
    )
    .await
  }
}
