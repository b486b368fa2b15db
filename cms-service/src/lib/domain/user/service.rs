use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::SeedAccount;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Hasher used for new passwords
    pub fn new(repository: Arc<UR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, username = %created_user.username, "User created");

        Ok(created_user)
    }

    async fn seed_users(&self, accounts: &[SeedAccount]) -> Result<usize, UserError> {
        let mut created = 0;

        for seed in accounts {
            let username = Username::new(seed.username.clone())?;

            if self.repository.find_by_username(&username).await?.is_some() {
                tracing::debug!(username = %username, "Seed user already exists, skipping");
                continue;
            }

            self.create_user(CreateUserCommand::new(username, seed.password.clone()))
                .await
                .map_err(|e| {
                    tracing::error!(username = %seed.username, error = %e, "Failed to seed user");
                    e
                })?;
            created += 1;
        }

        tracing::info!(created, total = accounts.len(), "User seeding completed");
        Ok(created)
    }
}
