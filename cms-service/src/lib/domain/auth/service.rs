use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::TokenProvider;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Login and token refresh orchestration.
///
/// Stateless between requests: holds the credential store, the token
/// provider and the password hasher, none of which are mutated.
pub struct AuthService<UR, TP>
where
    UR: UserRepository,
    TP: TokenProvider,
{
    repository: Arc<UR>,
    tokens: Arc<TP>,
    password_hasher: auth::PasswordHasher,
}

impl<UR, TP> AuthService<UR, TP>
where
    UR: UserRepository,
    TP: TokenProvider,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store
    /// * `tokens` - Token issuance and validation
    /// * `password_hasher` - Verifier for stored password hashes
    pub fn new(
        repository: Arc<UR>,
        tokens: Arc<TP>,
        password_hasher: auth::PasswordHasher,
    ) -> Self {
        Self {
            repository,
            tokens,
            password_hasher,
        }
    }

    fn issue_pair(&self, user_id: &UserId) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.tokens.issue_access_token(user_id)?,
            refresh_token: self.tokens.issue_refresh_token(user_id)?,
        })
    }
}

#[async_trait]
impl<UR, TP> AuthServicePort for AuthService<UR, TP>
where
    UR: UserRepository,
    TP: TokenProvider,
{
    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError> {
        // A name that fails validation can never have been stored
        let username = Username::new(credentials.username.clone())
            .map_err(|_| AuthError::NotFound(credentials.username.clone()))?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AuthError::NotFound(credentials.username.clone()))?;

        if !self
            .password_hasher
            .verify(&credentials.password, &user.password_hash)?
        {
            tracing::warn!(username = %username, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.issue_pair(&user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(pair)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let user_id = self.tokens.validate_refresh_token(refresh_token)?;

        let pair = self.issue_pair(&user_id)?;
        tracing::debug!(user_id = %user_id, "Token pair refreshed");

        Ok(pair)
    }

    fn authorize(&self, access_token: &str) -> Result<UserId, AuthError> {
        self.tokens.validate_access_token(access_token)
    }
}
