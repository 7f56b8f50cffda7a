//! The `HarmonyStore` and `LegacyStore` traits.
//!
//! The traits are implemented by storage backends (e.g.
//! `heirloom-store-sqlite`). The HTTP layer depends on these abstractions,
//! not on any concrete backend.
//!
//! Each method maps to exactly one statement, except
//! [`LegacyStore::create_family`], which runs two statements in a single
//! transaction.

use std::future::Future;

use crate::{
  error::StoreError,
  harmony::{
    DirectMessage, Group, GroupMember, Invite, InviteUpdate, MediaAlbum,
    MediaItem, MemorialTribute, NewDirectMessage, NewGroup, NewInvite,
    NewMediaAlbum, NewMediaItem, NewMemorialTribute, NewPerson,
    NewRelationship, NewTimelineEvent, NewUser, Person, PersonUpdate,
    Relationship, TimelineEvent, User,
  },
  legacy::{
    Family, FamilyEvent, FamilyEventUpdate, FamilyMember, FamilyRequest,
    NewFamilyEvent, NewStory, NewTreeMember, Story, StoryUpdate, TreeMember,
    TreeMemberUpdate,
  },
  status::{MessageStatus, PostStatus},
};

// ─── Harmony ─────────────────────────────────────────────────────────────────

/// Abstraction over a "Project Harmony" store backend.
///
/// Updates of scalar fields do not report a missing row as an error: they
/// return `Ok(None)`. Status transitions behave the same way, and the HTTP
/// layer decides what a missing row means for each route.
pub trait HarmonyStore: Send + Sync {
  type Error: StoreError;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Insert a user with default role and status. Fails with a conflict if
  /// the email is taken.
  fn register_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── Invites ───────────────────────────────────────────────────────────

  /// All invites, newest first.
  fn list_invites(
    &self,
  ) -> impl Future<Output = Result<Vec<Invite>, Self::Error>> + Send + '_;

  fn add_invite(
    &self,
    input: NewInvite,
  ) -> impl Future<Output = Result<Invite, Self::Error>> + Send + '_;

  fn update_invite(
    &self,
    invite_id: i64,
    input: InviteUpdate,
  ) -> impl Future<Output = Result<Option<Invite>, Self::Error>> + Send + '_;

  // ── Groups ────────────────────────────────────────────────────────────

  fn list_groups(
    &self,
  ) -> impl Future<Output = Result<Vec<Group>, Self::Error>> + Send + '_;

  fn add_group(
    &self,
    input: NewGroup,
  ) -> impl Future<Output = Result<Group, Self::Error>> + Send + '_;

  fn list_group_members(
    &self,
    group_id: i64,
  ) -> impl Future<Output = Result<Vec<GroupMember>, Self::Error>> + Send + '_;

  /// Add a user to a group. Adding the same pair twice is a conflict.
  fn add_group_member(
    &self,
    group_id: i64,
    user_id: Option<i64>,
  ) -> impl Future<Output = Result<GroupMember, Self::Error>> + Send + '_;

  // ── People and relationships ──────────────────────────────────────────

  /// All people ordered by name.
  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  fn add_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  fn update_person(
    &self,
    person_id: i64,
    input: PersonUpdate,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn list_relationships(
    &self,
  ) -> impl Future<Output = Result<Vec<Relationship>, Self::Error>> + Send + '_;

  fn add_relationship(
    &self,
    input: NewRelationship,
  ) -> impl Future<Output = Result<Relationship, Self::Error>> + Send + '_;

  // ── Timeline ──────────────────────────────────────────────────────────

  /// Visible events, latest event date first.
  fn list_timeline(
    &self,
  ) -> impl Future<Output = Result<Vec<TimelineEvent>, Self::Error>> + Send + '_;

  fn add_timeline_event(
    &self,
    input: NewTimelineEvent,
  ) -> impl Future<Output = Result<TimelineEvent, Self::Error>> + Send + '_;

  fn set_timeline_event_status(
    &self,
    event_id: i64,
    status: PostStatus,
  ) -> impl Future<Output = Result<Option<TimelineEvent>, Self::Error>> + Send + '_;

  // ── Media ─────────────────────────────────────────────────────────────

  fn list_albums(
    &self,
  ) -> impl Future<Output = Result<Vec<MediaAlbum>, Self::Error>> + Send + '_;

  fn add_album(
    &self,
    input: NewMediaAlbum,
  ) -> impl Future<Output = Result<MediaAlbum, Self::Error>> + Send + '_;

  /// Visible items of one album.
  fn list_media_items(
    &self,
    album_id: i64,
  ) -> impl Future<Output = Result<Vec<MediaItem>, Self::Error>> + Send + '_;

  fn add_media_item(
    &self,
    album_id: i64,
    input: NewMediaItem,
  ) -> impl Future<Output = Result<MediaItem, Self::Error>> + Send + '_;

  /// Only matches an item that belongs to `album_id`.
  fn set_media_item_status(
    &self,
    album_id: i64,
    item_id: i64,
    status: PostStatus,
  ) -> impl Future<Output = Result<Option<MediaItem>, Self::Error>> + Send + '_;

  // ── Memorial tributes ─────────────────────────────────────────────────

  /// Visible tributes for a person, newest first.
  fn list_tributes(
    &self,
    person_id: i64,
  ) -> impl Future<Output = Result<Vec<MemorialTribute>, Self::Error>> + Send + '_;

  fn add_tribute(
    &self,
    person_id: i64,
    input: NewMemorialTribute,
  ) -> impl Future<Output = Result<MemorialTribute, Self::Error>> + Send + '_;

  /// Only matches a tribute posted for `person_id`.
  fn set_tribute_status(
    &self,
    person_id: i64,
    tribute_id: i64,
    status: PostStatus,
  ) -> impl Future<Output = Result<Option<MemorialTribute>, Self::Error>> + Send + '_;

  // ── Direct messages ───────────────────────────────────────────────────

  /// Messages addressed to `recipient_id`, newest first.
  fn list_messages_for(
    &self,
    recipient_id: i64,
  ) -> impl Future<Output = Result<Vec<DirectMessage>, Self::Error>> + Send + '_;

  fn send_message(
    &self,
    input: NewDirectMessage,
  ) -> impl Future<Output = Result<DirectMessage, Self::Error>> + Send + '_;

  fn set_message_status(
    &self,
    message_id: i64,
    status: MessageStatus,
  ) -> impl Future<Output = Result<Option<DirectMessage>, Self::Error>> + Send + '_;
}

// ─── Legacy ──────────────────────────────────────────────────────────────────

/// Abstraction over a "Family Legacy" store backend.
///
/// Item updates and deletes are scoped by both `family_code` and `id`; an id
/// that belongs to another family is treated as missing.
pub trait LegacyStore: Send + Sync {
  type Error: StoreError;

  // ── Families ──────────────────────────────────────────────────────────

  /// Create the family and its admin member atomically. A taken code is a
  /// conflict and leaves no member row behind.
  fn create_family(
    &self,
    input: FamilyRequest,
  ) -> impl Future<Output = Result<Family, Self::Error>> + Send + '_;

  /// Add a `member` to an existing family in a single conditional insert.
  /// Returns `None` if the family does not exist.
  fn join_family(
    &self,
    input: FamilyRequest,
  ) -> impl Future<Output = Result<Option<FamilyMember>, Self::Error>> + Send + '_;

  /// Members of a family, most recently joined first.
  fn list_members<'a>(
    &'a self,
    family_code: &'a str,
  ) -> impl Future<Output = Result<Vec<FamilyMember>, Self::Error>> + Send + 'a;

  // ── Tree ──────────────────────────────────────────────────────────────

  fn list_tree<'a>(
    &'a self,
    family_code: &'a str,
  ) -> impl Future<Output = Result<Vec<TreeMember>, Self::Error>> + Send + 'a;

  fn add_tree_member<'a>(
    &'a self,
    family_code: &'a str,
    input: NewTreeMember,
  ) -> impl Future<Output = Result<TreeMember, Self::Error>> + Send + 'a;

  fn update_tree_member<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
    input: TreeMemberUpdate,
  ) -> impl Future<Output = Result<Option<TreeMember>, Self::Error>> + Send + 'a;

  /// Returns `false` if nothing was deleted.
  fn delete_tree_member<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Stories ───────────────────────────────────────────────────────────

  fn list_stories<'a>(
    &'a self,
    family_code: &'a str,
  ) -> impl Future<Output = Result<Vec<Story>, Self::Error>> + Send + 'a;

  fn add_story<'a>(
    &'a self,
    family_code: &'a str,
    input: NewStory,
  ) -> impl Future<Output = Result<Story, Self::Error>> + Send + 'a;

  fn update_story<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
    input: StoryUpdate,
  ) -> impl Future<Output = Result<Option<Story>, Self::Error>> + Send + 'a;

  fn delete_story<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Events ────────────────────────────────────────────────────────────

  /// Events of a family in calendar order.
  fn list_events<'a>(
    &'a self,
    family_code: &'a str,
  ) -> impl Future<Output = Result<Vec<FamilyEvent>, Self::Error>> + Send + 'a;

  fn add_event<'a>(
    &'a self,
    family_code: &'a str,
    input: NewFamilyEvent,
  ) -> impl Future<Output = Result<FamilyEvent, Self::Error>> + Send + 'a;

  fn update_event<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
    input: FamilyEventUpdate,
  ) -> impl Future<Output = Result<Option<FamilyEvent>, Self::Error>> + Send + 'a;

  fn delete_event<'a>(
    &'a self,
    family_code: &'a str,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}
