// ABOUTME: Unified error handling for the HeartWise Score library
// ABOUTME: Defines ErrorCode, AppError with context/source chaining, and AppResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HeartWise Score

//! # Unified Error Handling
//!
//! Centralized error types shared across the crate. Scoring itself is total
//! over validated input; errors arise only from input validation helpers and
//! the remote prediction call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// The provided value is outside the acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // External services (5000-5999)
    /// The prediction service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The prediction service could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Internal (9000-9999)
    /// An internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ExternalServiceError => "The prediction service encountered an error",
            Self::ExternalServiceUnavailable => "The prediction service is currently unavailable",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing remote prediction calls
    pub request_id: Option<Uuid>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the library
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.context.request_id = Some(request_id);
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its acceptable range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// External service error
    pub fn external_service(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
    }

    /// External service unreachable
    pub fn external_service_unavailable(service: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{service}: {}", message.into()),
        )
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_code_description_and_message() {
        let err = AppError::value_out_of_range("age 17 is below the minimum of 18");
        let rendered = err.to_string();
        assert!(rendered.contains("outside the acceptable range"));
        assert!(rendered.contains("age 17"));
    }

    #[test]
    fn external_service_error_carries_service_name() {
        let err = AppError::external_service("prediction API", "HTTP 503");
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("prediction API"));
        assert!(err.message.contains("HTTP 503"));
    }
}
