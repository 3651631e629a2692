// Copyright 2025 The Curation Project Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types and error handling utilities for the REST API.
//!
//! Every guard the resource handler applies maps to one [`ApiError`]
//! variant; all of them are detected before any store mutation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Error codes for API responses
pub mod error_codes {
    /// Create payload already carried an id.
    pub const ID_ALREADY_SET: &str = "ID_ALREADY_SET";
    /// A required field was null or absent.
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    /// Update payload carried no id.
    pub const ID_MISSING: &str = "ID_MISSING";
    /// Body id and path id disagree.
    pub const ID_MISMATCH: &str = "ID_MISMATCH";
    /// Update targeted an id that was never created.
    pub const ID_UNKNOWN: &str = "ID_UNKNOWN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetail>,
}

/// Additional error details
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Entity type if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Entity id if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<i64>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: ErrorDetail) -> Self {
        self.details = Some(details);
        self
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::ID_ALREADY_SET
        | error_codes::VALIDATION_FAILED
        | error_codes::ID_MISSING
        | error_codes::ID_MISMATCH
        | error_codes::ID_UNKNOWN => StatusCode::BAD_REQUEST,

        error_codes::NOT_FOUND => StatusCode::NOT_FOUND,

        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Everything a resource handler can reject a request with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("a new {entity} cannot already have an id")]
    IdAlreadySet { entity: &'static str },

    #[error("invalid {entity}: field '{field}' must not be null")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("invalid {entity}: no id supplied")]
    MissingId { entity: &'static str },

    #[error("invalid {entity}: body id {body_id} does not match path id {path_id}")]
    IdMismatch {
        entity: &'static str,
        body_id: i64,
        path_id: i64,
    },

    // Pure-update semantics: a never-seen id on PUT/PATCH is treated as an
    // invalid identifier, not as a missing resource.
    #[error("invalid {entity}: no record exists with id {id}")]
    UnknownId { entity: &'static str, id: i64 },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::IdAlreadySet { .. } => error_codes::ID_ALREADY_SET,
            ApiError::MissingField { .. } => error_codes::VALIDATION_FAILED,
            ApiError::MissingId { .. } => error_codes::ID_MISSING,
            ApiError::IdMismatch { .. } => error_codes::ID_MISMATCH,
            ApiError::UnknownId { .. } => error_codes::ID_UNKNOWN,
            ApiError::NotFound { .. } => error_codes::NOT_FOUND,
            ApiError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }

    pub fn status(&self) -> StatusCode {
        status_from_code(self.code())
    }

    fn detail(&self) -> Option<ErrorDetail> {
        match self {
            ApiError::IdAlreadySet { entity }
            | ApiError::MissingField { entity, .. }
            | ApiError::MissingId { entity } => Some(ErrorDetail {
                entity_type: Some((*entity).to_string()),
                entity_id: None,
            }),
            ApiError::IdMismatch {
                entity, body_id, ..
            } => Some(ErrorDetail {
                entity_type: Some((*entity).to_string()),
                entity_id: Some(*body_id),
            }),
            ApiError::UnknownId { entity, id } | ApiError::NotFound { entity, id } => {
                Some(ErrorDetail {
                    entity_type: Some((*entity).to_string()),
                    entity_id: Some(*id),
                })
            }
            ApiError::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Internal(_)) {
            log::error!("Internal error handling request: {self}");
        }
        let mut body = ErrorResponse::new(self.code(), self.to_string());
        if let Some(detail) = self.detail() {
            body = body.with_details(detail);
        }
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new("TEST_CODE", "Test message");
        assert_eq!(response.code, "TEST_CODE");
        assert_eq!(response.message, "Test message");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("TEST_CODE", "Test message");
        let json = serde_json::to_string(&response).expect("Failed to serialize");

        assert!(json.contains("\"code\":\"TEST_CODE\""));
        assert!(json.contains("\"message\":\"Test message\""));
        // details should be omitted when None
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_error_response_serialization_with_details() {
        let details = ErrorDetail {
            entity_type: Some("gene".to_string()),
            entity_id: None,
        };

        let response = ErrorResponse::new("TEST_CODE", "Test message").with_details(details);
        let json = serde_json::to_string(&response).expect("Failed to serialize");

        assert!(json.contains("\"details\""));
        assert!(json.contains("\"entity_type\":\"gene\""));
        // Null fields should be omitted
        assert!(!json.contains("entity_id"));
    }

    #[test]
    fn test_status_from_code_bad_request() {
        assert_eq!(
            status_from_code(error_codes::ID_ALREADY_SET),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_from_code(error_codes::VALIDATION_FAILED),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_from_code(error_codes::ID_MISSING),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_from_code(error_codes::ID_MISMATCH),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_from_code(error_codes::ID_UNKNOWN),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_status_from_code_not_found() {
        assert_eq!(
            status_from_code(error_codes::NOT_FOUND),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_status_from_code_internal_error() {
        assert_eq!(
            status_from_code(error_codes::INTERNAL_ERROR),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // Unknown codes should also be internal server error
        assert_eq!(
            status_from_code("UNKNOWN_CODE"),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_statuses() {
        assert_eq!(
            ApiError::IdAlreadySet { entity: "gene" }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownId {
                entity: "gene",
                id: 99,
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound {
                entity: "gene",
                id: 99,
            }
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::IdMismatch {
            entity: "rule",
            body_id: 2,
            path_id: 1,
        };
        assert!(err.to_string().contains("body id 2"));
        assert!(err.to_string().contains("path id 1"));

        let err = ApiError::MissingField {
            entity: "gene",
            field: "hugoSymbol",
        };
        assert!(err.to_string().contains("hugoSymbol"));
    }
}
