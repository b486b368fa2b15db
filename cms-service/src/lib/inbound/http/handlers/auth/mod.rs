pub mod login;
pub mod refresh_tokens;

pub use login::login;
pub use refresh_tokens::refresh_tokens;

use serde::Serialize;

use crate::domain::auth::models::TokenPair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairResponseData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponseData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
