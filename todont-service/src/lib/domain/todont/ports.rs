use async_trait::async_trait;

use crate::domain::todont::errors::TodontError;
use crate::domain::todont::models::CreateTodontCommand;
use crate::domain::todont::models::NewTodont;
use crate::domain::todont::models::ToDont;
use crate::domain::todont::models::TodontId;
use crate::domain::todont::models::UpdateTodontCommand;
use crate::domain::user::models::UserId;

/// Port for ownership-scoped item operations.
///
/// Every operation takes the caller's user id and enforces it as a hard
/// filter; there is no unscoped variant.
#[async_trait]
pub trait TodontServicePort: Send + Sync + 'static {
    /// All items belonging to the owner, most recently created first.
    /// Empty when the owner has none, never an error.
    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<ToDont>, TodontError>;

    /// One item by id, `None` when the id is missing, invalid, or owned
    /// by someone else; the cases are indistinguishable.
    async fn get_by_id(&self, id: TodontId, user_id: UserId)
        -> Result<Option<ToDont>, TodontError>;

    /// Create an item; stamps `created_at == updated_at` with the current
    /// UTC instant and returns the stored record with its assigned id.
    async fn create(&self, command: CreateTodontCommand) -> Result<ToDont, TodontError>;

    /// Overwrite title and active flag, refresh `updated_at`; `None`
    /// under the same absent-or-foreign rule as `get_by_id`.
    async fn update(
        &self,
        id: TodontId,
        user_id: UserId,
        command: UpdateTodontCommand,
    ) -> Result<Option<ToDont>, TodontError>;

    /// Remove the item; `false` under the absent-or-foreign rule.
    async fn delete(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError>;

    /// Flip the active flag and refresh `updated_at`; `false` under the
    /// absent-or-foreign rule. Two toggles restore the original value.
    async fn toggle_active(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError>;
}

/// Persistence operations for items. The owner filter is repeated here in
/// SQL; a caller-supplied id is never trusted without it.
#[async_trait]
pub trait TodontRepository: Send + Sync + 'static {
    /// Items for one owner, `created_at` descending, images loaded.
    async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<ToDont>, TodontError>;

    /// One item matching both id and owner, images loaded.
    async fn find_by_id(
        &self,
        id: TodontId,
        user_id: UserId,
    ) -> Result<Option<ToDont>, TodontError>;

    /// Insert and return the stored record with its assigned id.
    async fn create(&self, todont: NewTodont) -> Result<ToDont, TodontError>;

    /// Write back title, active flag, and `updated_at` for a row matching
    /// both id and owner; `false` when no row matched.
    async fn update(&self, todont: &ToDont) -> Result<bool, TodontError>;

    /// Delete a row matching both id and owner; `false` when none did.
    async fn delete(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError>;
}
