//! Bearer-token authentication for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::error_response};
use tesoreria_shared::{AppError, Claims, JwtError};

/// Message returned when no bearer token is sent.
pub const MISSING_TOKEN_MESSAGE: &str = "Authorization header with Bearer token is required";

/// Message returned for an expired token.
pub const EXPIRED_TOKEN_MESSAGE: &str = "Token has expired";

/// Message returned for a token that fails validation.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or malformed token";

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware that validates JWT tokens.
///
/// Valid claims are stored in the request extensions for [`AuthUser`].
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return error_response(&AppError::Unauthorized(MISSING_TOKEN_MESSAGE.to_string()));
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            let message = match e {
                JwtError::Expired => EXPIRED_TOKEN_MESSAGE,
                _ => INVALID_TOKEN_MESSAGE,
            };
            error_response(&AppError::Unauthorized(message.to_string()))
        }
    }
}

/// Extractor for authenticated user claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the user ID from the claims.
    #[must_use]
    pub const fn user_id(&self) -> uuid::Uuid {
        self.0.user_id()
    }

    /// Returns the company the user works in.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingCompany` when the token carries no company.
    pub fn company_id(&self) -> Result<i64, AppError> {
        self.0.company_id().ok_or(AppError::MissingCompany)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                error_response(&AppError::Unauthorized(
                    "Authentication required".to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Basic abc"), None);
    }
}
