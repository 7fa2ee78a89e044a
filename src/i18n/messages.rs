//! User-facing error messages
//!
//! Single point where module-boundary errors become localized notification
//! text. Invalid-credential, duplicate-email and duplicate-username
//! failures each map to their own message.

use crate::i18n::loader::I18n;
use crate::utils::errors::{ApiError, AppError};

/// Translation key for an error
fn message_key(error: &AppError) -> &'static str {
    match error {
        AppError::Api(ApiError::InvalidCredentials) => "auth.login.invalid_credentials",
        AppError::Api(ApiError::DuplicateEmail) => "auth.register.duplicate_email",
        AppError::Api(ApiError::DuplicateUsername) => "auth.register.duplicate_username",
        AppError::Api(ApiError::Timeout) | AppError::Api(ApiError::ServiceUnavailable) => {
            "errors.network"
        }
        AppError::Api(_) | AppError::Http(_) => "errors.request_failed",
        AppError::NotAuthenticated(_) => "auth.session.missing",
        AppError::OperationInFlight => "auth.operation_in_flight",
        AppError::EventNotFound { .. } => "events.not_found",
        AppError::InvalidInput(_) => "errors.invalid_input",
        _ => "errors.unexpected",
    }
}

/// Localized user-facing message for an error
pub fn error_message(i18n: &I18n, lang: &str, error: &AppError) -> String {
    i18n.t(message_key(error), lang, None)
}
