//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The backend reports failures as HTTP statuses with a plain-text or JSON
/// body; [`AppError::from_status`] classifies those into variants so callers
/// can react (re-login on `Unauthorized`, show the message on `Validation`,
/// and so on).
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access denied.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., duplicate entry).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Response body did not match the wire contract.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Transport-level failure talking to the backend.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Internal error (ours or the backend's 5xx).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies a backend response status into an error variant.
    ///
    /// `message` is the response body text when one was sent, otherwise the
    /// canonical status reason.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::Validation(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::BusinessRule(message),
            500..=599 => Self::Internal(message),
            _ => Self::Http(format!("unexpected status {status}: {message}")),
        }
    }

    /// Returns the stable error code used in logs and console output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
