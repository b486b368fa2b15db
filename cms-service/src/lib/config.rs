use std::env;

use auth::HashAlgorithm;
use auth::PasswordHasher;
use auth::TokenConfig;
use config::builder::DefaultState;
use config::Config as ConfigBuilder;
use config::ConfigBuilder as SourceBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::domain::user::models::SeedAccount;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn default_max_connections() -> u32 {
        5
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_seconds: i64,
}

impl JwtConfig {
    /// Settings handed to the token manager at construction.
    ///
    /// # Errors
    /// * `Message` - A TTL does not fit in a `chrono::Duration`
    pub fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        Ok(TokenConfig {
            access_token_secret: self.access_token_secret.clone(),
            refresh_token_secret: self.refresh_token_secret.clone(),
            access_token_ttl: Self::ttl(
                "jwt.access_token_ttl_seconds",
                self.access_token_ttl_seconds,
            )?,
            refresh_token_ttl: Self::ttl(
                "jwt.refresh_token_ttl_seconds",
                self.refresh_token_ttl_seconds,
            )?,
        })
    }

    fn ttl(key: &str, seconds: i64) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::try_seconds(seconds)
            .ok_or_else(|| ConfigError::Message(format!("{key} is out of range: {seconds}")))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    #[serde(default = "PasswordConfig::default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    fn default_bcrypt_cost() -> u32 {
        12
    }

    pub fn hasher(&self) -> PasswordHasher {
        match self.algorithm {
            HashAlgorithm::Bcrypt => PasswordHasher::bcrypt(self.bcrypt_cost),
            HashAlgorithm::Argon2 => PasswordHasher::with_algorithm(HashAlgorithm::Argon2),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            bcrypt_cost: Self::default_bcrypt_cost(),
        }
    }
}

/// Accounts provisioned at startup when absent.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

impl SeedConfig {
    pub fn accounts(&self) -> Vec<SeedAccount> {
        self.users.iter().map(SeedAccount::from).collect()
    }
}

#[derive(Deserialize, Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<&SeedUser> for SeedAccount {
    fn from(user: &SeedUser) -> Self {
        SeedAccount::new(user.username.clone(), user.password.clone())
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__ACCESS_TOKEN_SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__ACCESS_TOKEN_TTL_SECONDS=600 overrides jwt.access_token_ttl_seconds
            .add_source(Environment::default().separator("__"));

        Self::build(builder)
    }

    fn build(builder: SourceBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
