//! Request extractors.
//!
//! Both wrap an axum extractor so its rejection becomes an [`ApiError`]: a
//! malformed body or path gets the same `{"error": …}` shape as every other
//! failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// [`axum::Json`] with an [`ApiError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// [`axum::extract::Path`] with an [`ApiError`] rejection, e.g. for a
/// non-numeric id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
