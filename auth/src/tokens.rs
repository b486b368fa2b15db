use chrono::Duration;
use chrono::Utc;
use thiserror::Error;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenClaims;
use crate::jwt::TokenKind;

/// Construction-time settings for [`TokenManager`].
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

/// Token issuance and validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
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

    #[error("Invalid token configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired | JwtError::InvalidSignature | JwtError::Malformed(_) => {
                TokenError::InvalidToken(err.to_string())
            }
            JwtError::InvalidClaims(reason) => TokenError::InvalidTokenClaims(reason),
            JwtError::EncodingFailed(reason) => TokenError::GenerateAccessToken(reason),
            JwtError::ExpiryOutOfRange => TokenError::GenerateAccessToken(err.to_string()),
        }
    }
}

/// Issues and validates access and refresh tokens.
///
/// Each kind is signed with its own secret. Holds only immutable
/// configuration and can be shared freely between request handlers.
pub struct TokenManager {
    access: JwtHandler,
    refresh: JwtHandler,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl TokenManager {
    /// Create a token manager from explicit configuration.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - A secret is empty, both secrets are equal, or a TTL is not
    ///   positive or pushes expiry past the representable range
    pub fn new(config: &TokenConfig) -> Result<Self, TokenError> {
        if config.access_token_secret.is_empty() || config.refresh_token_secret.is_empty() {
            return Err(TokenError::InvalidConfiguration(
                "token secrets must not be empty".to_string(),
            ));
        }
        if config.access_token_secret == config.refresh_token_secret {
            return Err(TokenError::InvalidConfiguration(
                "access and refresh token secrets must differ".to_string(),
            ));
        }
        if config.access_token_ttl <= Duration::zero() || config.refresh_token_ttl <= Duration::zero()
        {
            return Err(TokenError::InvalidConfiguration(
                "token lifetimes must be positive".to_string(),
            ));
        }
        let now = Utc::now();
        if now.checked_add_signed(config.access_token_ttl).is_none()
            || now.checked_add_signed(config.refresh_token_ttl).is_none()
        {
            return Err(TokenError::InvalidConfiguration(
                "token lifetimes are out of range".to_string(),
            ));
        }

        Ok(Self {
            access: JwtHandler::new(config.access_token_secret.as_bytes()),
            refresh: JwtHandler::new(config.refresh_token_secret.as_bytes()),
            access_token_ttl: config.access_token_ttl,
            refresh_token_ttl: config.refresh_token_ttl,
        })
    }

    /// Issue an access token for a subject, valid for the access TTL.
    ///
    /// # Errors
    /// * `GenerateAccessToken` - Signing failed or the expiry is out of range
    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        TokenClaims::issue(subject, TokenKind::Access, Utc::now(), self.access_token_ttl)
            .and_then(|claims| self.access.encode(&claims))
            .map_err(|e| TokenError::GenerateAccessToken(e.to_string()))
    }

    /// Issue a refresh-tagged token for a subject, valid for the refresh TTL.
    ///
    /// # Errors
    /// * `GenerateRefreshToken` - Signing failed or the expiry is out of range
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        TokenClaims::issue(subject, TokenKind::Refresh, Utc::now(), self.refresh_token_ttl)
            .and_then(|claims| self.refresh.encode(&claims))
            .map_err(|e| TokenError::GenerateRefreshToken(e.to_string()))
    }

    /// Validate an access token.
    ///
    /// # Returns
    /// Decoded claims with a non-empty subject
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not verify with the access secret, or token expired
    /// * `InvalidTokenClaims` - Payload does not have the expected shape
    /// * `InvalidTokenType` - Token carries a non-access kind tag
    pub fn validate_access_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims: TokenClaims = self.access.decode(token)?;

        if claims.kind() != Some(TokenKind::Access) {
            return Err(TokenError::InvalidTokenType);
        }

        Self::with_subject(claims)
    }

    /// Validate a refresh token.
    ///
    /// A genuine access token presented here is reported as a type mismatch
    /// rather than a bad signature.
    ///
    /// # Returns
    /// Decoded claims with a non-empty subject
    ///
    /// # Errors
    /// * `InvalidTokenType` - Token is not refresh-tagged, or is an access token
    /// * `InvalidToken` - Signature does not verify with either secret, or token expired
    /// * `InvalidTokenClaims` - Payload does not have the expected shape
    pub fn validate_refresh_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims: TokenClaims = match self.refresh.decode(token) {
            Ok(claims) => claims,
            Err(JwtError::InvalidSignature) if self.is_access_token(token) => {
                return Err(TokenError::InvalidTokenType);
            }
            Err(e) => return Err(e.into()),
        };

        if claims.kind() != Some(TokenKind::Refresh) {
            return Err(TokenError::InvalidTokenType);
        }

        Self::with_subject(claims)
    }

    fn is_access_token(&self, token: &str) -> bool {
        self.access.decode::<TokenClaims>(token).is_ok()
    }

    fn with_subject(claims: TokenClaims) -> Result<TokenClaims, TokenError> {
        if claims.sub.trim().is_empty() {
            return Err(TokenError::InvalidTokenClaims(
                "subject is empty".to_string(),
            ));
        }
        Ok(claims)
    }
}
