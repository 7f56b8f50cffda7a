//! Row status flags.
//!
//! Media items, timeline events and memorial tributes carry a `Post_Status`
//! used as a moderation / soft-delete flag; list queries only return
//! [`PostStatus::Visible`] rows. Direct messages carry a delivery status.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
pub enum PostStatus {
  #[default]
  Visible,
  Hidden,
  Flagged,
}

impl PostStatus {
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownPostStatus(s.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.into() }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
pub enum MessageStatus {
  #[default]
  Sent,
  Delivered,
  Read,
}

impl MessageStatus {
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownMessageStatus(s.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.into() }
}

/// Role of a family member. The creator of a family is its admin; everyone
/// who joins later is a member. No authorisation is derived from it.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemberRole {
  Admin,
  Member,
}

impl MemberRole {
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownMemberRole(s.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.into() }
}
