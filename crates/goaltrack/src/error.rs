//! Error types for goaltrack.
//!
//! This module defines all error types used throughout the goaltrack crate,
//! along with their mapping onto HTTP responses.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients when a goal lookup finds nothing.
pub const GOAL_NOT_FOUND: &str = "Goal not found";

/// The main error type for goaltrack operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Lookup Errors ===
    /// A detail lookup matched no goal.
    #[error("{message}")]
    NotFound {
        /// User-visible message.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Seed Data Errors ===
    /// Failed to read a goal seed file.
    #[error("failed to read goal seed file {path}: {source}")]
    SeedLoad {
        /// Path to the seed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind.
        addr: SocketAddr,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for goaltrack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// The fixed not-found error raised by detail lookups.
    #[must_use]
    pub fn goal_not_found() -> Self {
        Self::NotFound {
            message: GOAL_NOT_FOUND.to_string(),
        }
    }

    /// Check if this error is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status this error renders as.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error body sent to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric HTTP status.
    pub status_code: u16,
    /// User-visible message.
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Internal failures don't leak details to clients.
        let message = match self {
            Self::NotFound { message } => message,
            other => {
                tracing::error!("request failed: {other}");
                "Internal Error".to_string()
            }
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
