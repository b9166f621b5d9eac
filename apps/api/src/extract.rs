//! Request extractors whose rejections render as `AppError`, so malformed
//! bodies, ids and query strings get the same JSON error body as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// `axum::Json` with an `AppError` rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with an `AppError` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with an `AppError` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
