use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Errors produced by login, refresh and request authorization.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Invalid token claims: {0}")]
    InvalidTokenClaims(String),

    #[error("Failed to generate access token: {0}")]
    GenerateAccessToken(String),

    #[error("Failed to generate refresh token: {0}")]
    GenerateRefreshToken(String),

    #[error("Token configuration error: {0}")]
    TokenConfiguration(String),

    #[error("Password verification failed: {0}")]
    Password(#[from] auth::PasswordError),

    /// Credential store failure, passed through as is.
    #[error(transparent)]
    CredentialStore(#[from] UserError),
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        match err {
            auth::TokenError::InvalidToken(reason) => AuthError::InvalidToken(reason),
            auth::TokenError::InvalidTokenType => AuthError::InvalidTokenType,
            auth::TokenError::InvalidTokenClaims(reason) => AuthError::InvalidTokenClaims(reason),
            auth::TokenError::GenerateAccessToken(reason) => AuthError::GenerateAccessToken(reason),
            auth::TokenError::GenerateRefreshToken(reason) => {
                AuthError::GenerateRefreshToken(reason)
            }
            auth::TokenError::InvalidConfiguration(reason) => AuthError::TokenConfiguration(reason),
        }
    }
}
