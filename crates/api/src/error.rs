// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maps internal errors to HTTP responses — spec.md §6, §7.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use conduit_core::{StoreError, ValidationErrorKind};
use conduit_service::ServiceError;
use serde_json::json;

/// The only error shape this API ever emits: a status code and a message.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(kind) => ApiError::BadRequest(kind.to_string()),
            ServiceError::Submission(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ValidationErrorKind> for ApiError {
    fn from(err: ValidationErrorKind) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(format!("pipeline not found: {id}")),
            StoreError::Other(msg) => ApiError::Internal(msg),
        }
    }
}
