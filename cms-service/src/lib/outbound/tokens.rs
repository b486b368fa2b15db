use auth::TokenConfig;
use auth::TokenError;
use auth::TokenManager;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::TokenProvider;
use crate::domain::user::models::UserId;

/// `TokenProvider` backed by the shared JWT token manager.
///
/// Subjects are user IDs; a token whose subject is not a UUID is rejected
/// as having invalid claims.
pub struct JwtTokenProvider {
    manager: TokenManager,
}

impl JwtTokenProvider {
    /// Build the provider from token settings.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secrets empty or equal, or lifetimes not positive
    pub fn new(config: &TokenConfig) -> Result<Self, TokenError> {
        Ok(Self {
            manager: TokenManager::new(config)?,
        })
    }

    fn subject(sub: &str) -> Result<UserId, AuthError> {
        UserId::from_string(sub).map_err(|e| AuthError::InvalidTokenClaims(e.to_string()))
    }
}

impl TokenProvider for JwtTokenProvider {
    fn issue_access_token(&self, user_id: &UserId) -> Result<String, AuthError> {
        Ok(self.manager.issue_access_token(&user_id.to_string())?)
    }

    fn issue_refresh_token(&self, user_id: &UserId) -> Result<String, AuthError> {
        Ok(self.manager.issue_refresh_token(&user_id.to_string())?)
    }

    fn validate_access_token(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.manager.validate_access_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Access token rejected");
            e
        })?;
        Self::subject(&claims.sub)
    }

    fn validate_refresh_token(&self, token: &str) -> Result<UserId, AuthError> {
        let claims = self.manager.validate_refresh_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Refresh token rejected");
            e
        })?;
        Self::subject(&claims.sub)
    }
}
