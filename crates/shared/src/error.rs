//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Message shown to clients for every server-side failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the request";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The authenticated user is not associated with any company.
    #[error("User has no associated company")]
    MissingCompany,

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::MissingCompany | Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::MissingCompany => "COMPANY_REQUIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message that is safe to show to API clients.
    ///
    /// Server-side failures collapse to [`GENERIC_FAILURE_MESSAGE`]; the
    /// detail is only meant for logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthorized(msg) | Self::Validation(msg) => msg.clone(),
            Self::MissingCompany => "The user is not associated with a company".to_string(),
            Self::Database(_) | Self::Internal(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Returns true for errors that originate on the server side.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AppError::Unauthorized(String::new()), 401, "UNAUTHORIZED")]
    #[case(AppError::MissingCompany, 400, "COMPANY_REQUIRED")]
    #[case(AppError::Validation(String::new()), 400, "VALIDATION_ERROR")]
    #[case(AppError::Database(String::new()), 500, "DATABASE_ERROR")]
    #[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
    fn test_error_status_and_code(
        #[case] error: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AppError::Database("relation \"plan_cuentas\" does not exist".into());

        assert!(err.is_server_error());
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("plan_cuentas"));
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = AppError::Validation("fechaInicio is required".into());

        assert!(!err.is_server_error());
        assert_eq!(err.public_message(), "fechaInicio is required");
        assert_eq!(err.to_string(), "Validation error: fechaInicio is required");
    }
}
