//! Core types and trait definitions for the Heirloom record service.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! describes both deployable variants:
//!
//! - [`harmony`]: the normalised user/person/media model ("Project Harmony").
//! - [`legacy`]: the tenant-scoped model keyed by a family code
//!   ("Family Legacy").

pub mod error;
pub mod harmony;
pub mod legacy;
pub mod status;
pub mod store;

pub use error::{Error, ErrorKind, Result, StoreError};
