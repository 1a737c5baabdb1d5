use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithTodonts;
use crate::domain::user::models::Username;

/// Port for user directory operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a freshly hashed password.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken (exact match)
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Authenticate by username and password.
    ///
    /// Returns `None` both when no such user exists and when the password
    /// does not match; callers cannot tell the two apart.
    ///
    /// # Errors
    /// * `Password` - Stored hash was unreadable
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(
        &self,
        username: &Username,
        password: &str,
    ) -> Result<Option<User>, UserError>;

    /// Look up a user by id, items included. `None` when absent.
    async fn get_user(&self, id: UserId) -> Result<Option<UserWithTodonts>, UserError>;

    /// Look up a user by exact username, items included. `None` when absent.
    async fn get_user_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserWithTodonts>, UserError>;
}

/// Persistence operations for the user identity record.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return it with its store-assigned id.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique constraint on username violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Credential lookup by exact username; no items attached.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Profile lookup by id, with the user's items loaded.
    async fn find_by_id_with_todonts(
        &self,
        id: UserId,
    ) -> Result<Option<UserWithTodonts>, UserError>;

    /// Profile lookup by exact username, with the user's items loaded.
    async fn find_by_username_with_todonts(
        &self,
        username: &Username,
    ) -> Result<Option<UserWithTodonts>, UserError>;
}
