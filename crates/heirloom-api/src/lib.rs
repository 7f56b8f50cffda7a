//! JSON REST API for Heirloom.
//!
//! Exposes one axum [`Router`](axum::Router) per record-service variant:
//! [`harmony_router`] over any [`HarmonyStore`](heirloom_core::store::HarmonyStore)
//! and [`legacy_router`] over any [`LegacyStore`](heirloom_core::store::LegacyStore).
//! There is no authentication; TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", heirloom_api::harmony_router(store.clone()))
//! ```

pub mod error;
pub mod extract;
pub mod harmony;
pub mod health;
pub mod legacy;

pub use error::ApiError;
pub use harmony::harmony_router;
pub use legacy::legacy_router;

#[cfg(test)]
mod tests;
