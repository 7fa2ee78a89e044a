//! Error handling for eventmate
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Every failure crossing a
//! service boundary is returned as a value; the caller decides what to show.

use thiserror::Error;

/// Main error type for the eventmate application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Another session operation is already in flight")]
    OperationInFlight,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Backend API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out")]
    Timeout,

    #[error("API service unavailable")]
    ServiceUnavailable,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Result type alias for eventmate operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for backend API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl AppError {
    /// Check if the error is recoverable by retrying the same user action
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Api(api) => api.is_recoverable(),
            AppError::Config(_) => false,
            AppError::NotAuthenticated(_) => false,
            AppError::OperationInFlight => true,
            AppError::EventNotFound { .. } => false,
            AppError::Http(_) => true,
            AppError::Serialization(_) => false,
            AppError::Io(_) => true,
            AppError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Config(_) => ErrorSeverity::Critical,
            AppError::NotAuthenticated(_) => ErrorSeverity::Warning,
            AppError::OperationInFlight => ErrorSeverity::Warning,
            AppError::InvalidInput(_) => ErrorSeverity::Info,
            AppError::Api(ApiError::InvalidCredentials)
            | AppError::Api(ApiError::DuplicateEmail)
            | AppError::Api(ApiError::DuplicateUsername) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

impl ApiError {
    /// Transport-level failures can succeed on a later attempt; rejections
    /// of the request itself cannot.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ApiError::RequestFailed(_) => true,
            ApiError::Timeout => true,
            ApiError::ServiceUnavailable => true,
            ApiError::InvalidResponse(_) => false,
            ApiError::InvalidCredentials => false,
            ApiError::DuplicateEmail => false,
            ApiError::DuplicateUsername => false,
            ApiError::Rejected(_) => false,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
