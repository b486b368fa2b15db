//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the CMS service:
//! - Password hashing (bcrypt, Argon2id) with scheme detection on verify
//! - Access/refresh token issuance and validation over HS256 JWTs
//!
//! Services define their own authentication ports and adapt these
//! implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::bcrypt(4);
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenConfig, TokenError, TokenManager};
//! use chrono::Duration;
//!
//! let manager = TokenManager::new(&TokenConfig {
//!     access_token_secret: "access_secret_at_least_32_bytes_long!".to_string(),
//!     refresh_token_secret: "refresh_secret_at_least_32_bytes_long!".to_string(),
//!     access_token_ttl: Duration::minutes(15),
//!     refresh_token_ttl: Duration::days(7),
//! })
//! .unwrap();
//!
//! let access_token = manager.issue_access_token("user123").unwrap();
//! let refresh_token = manager.issue_refresh_token("user123").unwrap();
//! let claims = manager.validate_refresh_token(&refresh_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! // An access token is never accepted where a refresh token is expected
//! assert_eq!(
//!     manager.validate_refresh_token(&access_token),
//!     Err(TokenError::InvalidTokenType)
//! );
//! ```

pub mod jwt;
pub mod password;
pub mod tokens;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenClaims;
pub use jwt::TokenKind;
pub use password::HashAlgorithm;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use tokens::TokenConfig;
pub use tokens::TokenError;
pub use tokens::TokenManager;
