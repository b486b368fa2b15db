use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;

/// The two token kinds issued by the token manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    const REFRESH_TAG: &'static str = "refresh";
    const ACCESS_TAG: &'static str = "access";

    /// Value written to the `type` claim. Access tokens carry no tag.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            TokenKind::Access => None,
            TokenKind::Refresh => Some(Self::REFRESH_TAG),
        }
    }

    /// Resolve a `type` claim back into a kind.
    ///
    /// # Returns
    /// None when the tag names no known kind
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        match tag {
            None | Some(Self::ACCESS_TAG) => Some(TokenKind::Access),
            Some(Self::REFRESH_TAG) => Some(TokenKind::Refresh),
            Some(_) => None,
        }
    }
}

/// Typed JWT payload shared by access and refresh tokens.
///
/// `sub` and `exp` are required when decoding; a payload without them fails to
/// parse rather than producing partially filled claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Unique token identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Kind tag, present on refresh tokens only
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub token_type: Option<String>,
}

impl TokenClaims {
    /// Build claims for a freshly issued token.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed
    /// * `kind` - Token kind, decides the `type` tag
    /// * `issued_at` - Issue instant
    /// * `ttl` - Lifetime added to `issued_at` to form `exp`
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` is not a representable instant
    pub fn issue(
        subject: impl ToString,
        kind: TokenKind,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpiryOutOfRange)?;

        Ok(Self {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: Some(issued_at.timestamp()),
            jti: Some(Uuid::new_v4().to_string()),
            token_type: kind.tag().map(str::to_string),
        })
    }

    /// Kind encoded in the `type` claim, None when the tag is unknown.
    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::from_tag(self.token_type.as_deref())
    }
}
