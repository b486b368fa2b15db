use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::TokenPair;
use crate::domain::user::models::UserId;

/// Port for authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token pair.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password
    ///
    /// # Returns
    /// Fresh access and refresh token
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is malformed
    /// * `GenerateAccessToken` / `GenerateRefreshToken` - Signing failed
    /// * `CredentialStore` - Database operation failed
    async fn login(&self, credentials: Credentials) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new token pair.
    ///
    /// # Arguments
    /// * `refresh_token` - Previously issued refresh token
    ///
    /// # Returns
    /// Fresh access and refresh token for the same subject
    ///
    /// # Errors
    /// * `InvalidTokenType` - Token is not a refresh token
    /// * `InvalidToken` - Signature invalid or token expired
    /// * `InvalidTokenClaims` - Subject missing or malformed
    /// * `GenerateAccessToken` / `GenerateRefreshToken` - Signing failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Resolve the user behind an access token.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid or token expired
    /// * `InvalidTokenType` - Token is not an access token
    /// * `InvalidTokenClaims` - Subject missing or malformed
    fn authorize(&self, access_token: &str) -> Result<UserId, AuthError>;
}

/// Token issuance and validation seam.
pub trait TokenProvider: Send + Sync + 'static {
    /// Issue an access token for the user.
    ///
    /// # Errors
    /// * `GenerateAccessToken` - Signing failed
    fn issue_access_token(&self, user_id: &UserId) -> Result<String, AuthError>;

    /// Issue a refresh token for the user.
    ///
    /// # Errors
    /// * `GenerateRefreshToken` - Signing failed
    fn issue_refresh_token(&self, user_id: &UserId) -> Result<String, AuthError>;

    /// Validate an access token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature invalid or token expired
    /// * `InvalidTokenType` - Token carries a non-access kind
    /// * `InvalidTokenClaims` - Subject missing or not a user ID
    fn validate_access_token(&self, token: &str) -> Result<UserId, AuthError>;

    /// Validate a refresh token and return its subject.
    ///
    /// # Errors
    /// * `InvalidTokenType` - Token is not refresh-tagged
    /// * `InvalidToken` - Signature invalid or token expired
    /// * `InvalidTokenClaims` - Subject missing or not a user ID
    fn validate_refresh_token(&self, token: &str) -> Result<UserId, AuthError>;
}
