//! Unified error type system for the Bootcampr desktop application.
//!
//! This module provides a centralized error handling approach, replacing scattered
//! String-based error returns with a typed `AppError` enum.
//!
//! Note: field-level validation outcomes (required, format, password rules) are
//! NOT represented here — they are ordinary data rendered inline by the frontend
//! (see `domain::validation::ValidationError`). `AppError` covers the fault
//! paths: rejected command input, lock poisoning, registration hand-off.

use std::fmt;

/// Unified application error type.
///
/// Each variant represents a failure domain of the application; the string
/// representation is suitable for returning to the webview.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Invalid command input outside the form's own field validation
    /// (e.g. unknown field name)
    Validation(String),

    /// Registration service errors (payload hand-off failed)
    Registration(String),

    /// Generic/internal errors that don't fit other categories
    Internal(String),
}

impl AppError {
    /// Create a validation error with a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a registration error with a message.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the error message as a string slice.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Registration(msg) => msg,
            AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Registration(msg) => write!(f, "Registration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Convert from `AppError` to `String`.
///
/// This implementation is used for Tauri command return values,
/// which require errors to be String type.
impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}

/// Type alias for Result with AppError.
pub type Result<T> = std::result::Result<T, AppError>;
