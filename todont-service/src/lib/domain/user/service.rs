use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithTodonts;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// User directory: registration and authentication over the credential
/// store, plus profile lookups.
///
/// Argon2 work runs on the blocking pool so it never stalls the async
/// request workers.
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
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(UserError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, UserError> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?
            .map_err(UserError::from)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self.hash_password(command.password).await?;

        let user = NewUser {
            username: command.username,
            password_hash,
        };

        let created = self.repository.create(user).await?;

        tracing::info!(user_id = %created.id, username = %created.username, "User registered");

        Ok(created)
    }

    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        // Unknown user and wrong password both end as Ok(None).
        let Some(user) = self.repository.find_by_username(username).await? else {
            return Ok(None);
        };

        let matches = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;

        if matches {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn get_user(&self, id: UserId) -> Result<Option<UserWithTodonts>, UserError> {
        self.repository.find_by_id_with_todonts(id).await
    }

    async fn get_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserWithTodonts>, UserError> {
        self.repository.find_by_username_with_todonts(username).await
    }
}
