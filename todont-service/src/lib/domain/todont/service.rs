use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todont::errors::TodontError;
use crate::domain::todont::models::CreateTodontCommand;
use crate::domain::todont::models::NewTodont;
use crate::domain::todont::models::ToDont;
use crate::domain::todont::models::TodontId;
use crate::domain::todont::models::UpdateTodontCommand;
use crate::domain::todont::ports::TodontRepository;
use crate::domain::todont::ports::TodontServicePort;
use crate::domain::user::models::UserId;

/// Ownership-scoped item service.
///
/// Each mutation is a read-check-write against the store with no
/// optimistic-concurrency token: concurrent writers to the same item are
/// last-writer-wins, and a write that races a delete lands on the
/// not-found result.
pub struct TodontService<TR>
where
    TR: TodontRepository,
{
    repository: Arc<TR>,
}

impl<TR> TodontService<TR>
where
    TR: TodontRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodontServicePort for TodontService<TR>
where
    TR: TodontRepository,
{
    async fn list_by_owner(&self, user_id: UserId) -> Result<Vec<ToDont>, TodontError> {
        self.repository.find_by_owner(user_id).await
    }

    async fn get_by_id(
        &self,
        id: TodontId,
        user_id: UserId,
    ) -> Result<Option<ToDont>, TodontError> {
        if !id.is_valid() {
            return Ok(None);
        }

        self.repository.find_by_id(id, user_id).await
    }

    async fn create(&self, command: CreateTodontCommand) -> Result<ToDont, TodontError> {
        let now = Utc::now();

        let todont = NewTodont {
            title: command.title,
            is_active: command.is_active,
            created_at: now,
            updated_at: now,
            user_id: command.user_id,
        };

        let created = self.repository.create(todont).await?;

        tracing::debug!(todont_id = %created.id, user_id = %created.user_id, "ToDont created");

        Ok(created)
    }

    async fn update(
        &self,
        id: TodontId,
        user_id: UserId,
        command: UpdateTodontCommand,
    ) -> Result<Option<ToDont>, TodontError> {
        if !id.is_valid() {
            return Ok(None);
        }

        let Some(mut existing) = self.repository.find_by_id(id, user_id).await? else {
            return Ok(None);
        };

        existing.title = command.title;
        existing.is_active = command.is_active;
        existing.updated_at = Utc::now();

        if !self.repository.update(&existing).await? {
            return Ok(None);
        }

        Ok(Some(existing))
    }

    async fn delete(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError> {
        if !id.is_valid() {
            return Ok(false);
        }

        self.repository.delete(id, user_id).await
    }

    async fn toggle_active(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError> {
        if !id.is_valid() {
            return Ok(false);
        }

        let Some(mut existing) = self.repository.find_by_id(id, user_id).await? else {
            return Ok(false);
        };

        existing.is_active = !existing.is_active;
        existing.updated_at = Utc::now();

        self.repository.update(&existing).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::todont::models::Title;

    /// In-memory stand-in for the Postgres repository, filtering by owner
    /// exactly as the SQL predicates do.
    #[derive(Default)]
    struct InMemoryTodontRepository {
        rows: Mutex<HashMap<i64, ToDont>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl TodontRepository for InMemoryTodontRepository {
        async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<ToDont>, TodontError> {
            let rows = self.rows.lock().unwrap();
            let mut found: Vec<ToDont> = rows
                .values()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect();
            found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(found)
        }

        async fn find_by_id(
            &self,
            id: TodontId,
            user_id: UserId,
        ) -> Result<Option<ToDont>, TodontError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .get(&id.0)
                .filter(|t| t.user_id == user_id)
                .cloned())
        }

        async fn create(&self, todont: NewTodont) -> Result<ToDont, TodontError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;

            let created = ToDont {
                id: TodontId(*next_id),
                title: todont.title,
                is_active: todont.is_active,
                created_at: todont.created_at,
                updated_at: todont.updated_at,
                user_id: todont.user_id,
                images: vec![],
            };

            self.rows.lock().unwrap().insert(created.id.0, created.clone());
            Ok(created)
        }

        async fn update(&self, todont: &ToDont) -> Result<bool, TodontError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&todont.id.0) {
                Some(row) if row.user_id == todont.user_id => {
                    *row = todont.clone();
                    Ok(true)
                }
                _ => Ok(false),
            }
        }

        async fn delete(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get(&id.0) {
                Some(row) if row.user_id == user_id => {
                    rows.remove(&id.0);
                    Ok(true)
                }
                _ => Ok(false),
            }
        }
    }

    fn service() -> TodontService<InMemoryTodontRepository> {
        TodontService::new(Arc::new(InMemoryTodontRepository::default()))
    }

    fn command(title: &str, user_id: i64) -> CreateTodontCommand {
        CreateTodontCommand {
            title: Title::new(title.to_string()).unwrap(),
            is_active: true,
            user_id: UserId(user_id),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_equal_timestamps() {
        let service = service();

        let created = service.create(command("Test ToDont", 1)).await.unwrap();

        assert_eq!(created.title.as_str(), "Test ToDont");
        assert!(created.is_active);
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.id.is_valid());
    }

    #[tokio::test]
    async fn test_list_by_owner_most_recent_first() {
        let service = service();

        service.create(command("First", 1)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        service.create(command("Second", 1)).await.unwrap();

        let items = service.list_by_owner(UserId(1)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_str(), "Second");
        assert_eq!(items[1].title.as_str(), "First");
    }

    #[tokio::test]
    async fn test_list_by_owner_empty_for_new_user() {
        let service = service();

        service.create(command("Mine", 1)).await.unwrap();

        let items = service.list_by_owner(UserId(2)).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_hides_foreign_items() {
        let service = service();

        let created = service.create(command("Owned by 1", 1)).await.unwrap();

        let as_owner = service.get_by_id(created.id, UserId(1)).await.unwrap();
        assert_eq!(as_owner.as_ref().map(|t| t.id), Some(created.id));

        // Indistinguishable from a missing id.
        let as_other = service.get_by_id(created.id, UserId(2)).await.unwrap();
        assert!(as_other.is_none());
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let service = service();

        let created = service.create(command("Before", 1)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        let patch = UpdateTodontCommand {
            title: Title::new("After".to_string()).unwrap(),
            is_active: false,
        };

        let updated = service
            .update(created.id, UserId(1), patch)
            .await
            .unwrap()
            .expect("Expected updated item");

        assert_eq!(updated.title.as_str(), "After");
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_by_foreign_user_leaves_item_unchanged() {
        let service = service();

        let created = service.create(command("Untouchable", 1)).await.unwrap();

        let patch = UpdateTodontCommand {
            title: Title::new("Hijacked".to_string()).unwrap(),
            is_active: false,
        };

        let result = service.update(created.id, UserId(2), patch).await.unwrap();
        assert!(result.is_none());

        let refetched = service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .expect("Expected item to still exist");
        assert_eq!(refetched.title.as_str(), "Untouchable");
        assert!(refetched.is_active);
        assert_eq!(refetched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_flag_and_advances_updated_at() {
        let service = service();

        let created = service.create(command("Flippable", 1)).await.unwrap();
        assert!(created.is_active);

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        assert!(service.toggle_active(created.id, UserId(1)).await.unwrap());

        let once = service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .unwrap();
        assert!(!once.is_active);
        assert!(once.updated_at > created.updated_at);

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        assert!(service.toggle_active(created.id, UserId(1)).await.unwrap());

        let twice = service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .unwrap();
        assert!(twice.is_active);
        assert!(twice.updated_at > once.updated_at);
        assert!(twice.updated_at >= twice.created_at);
    }

    #[tokio::test]
    async fn test_toggle_by_foreign_user_fails_closed() {
        let service = service();

        let created = service.create(command("Owned by 1", 1)).await.unwrap();

        assert!(!service.toggle_active(created.id, UserId(2)).await.unwrap());

        let refetched = service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .unwrap();
        assert!(refetched.is_active);
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let service = service();

        let created = service.create(command("Doomed", 1)).await.unwrap();

        assert!(service.delete(created.id, UserId(1)).await.unwrap());
        assert!(service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_by_foreign_user_fails_closed() {
        let service = service();

        let created = service.create(command("Protected", 1)).await.unwrap();

        assert!(!service.delete(created.id, UserId(2)).await.unwrap());
        assert!(service
            .get_by_id(created.id, UserId(1))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_invalid_ids_behave_like_not_found() {
        let service = service();
        let owner = UserId(1);

        let patch = || UpdateTodontCommand {
            title: Title::new("whatever".to_string()).unwrap(),
            is_active: true,
        };

        for id in [TodontId(0), TodontId(-1), TodontId(999_999)] {
            assert!(service.get_by_id(id, owner).await.unwrap().is_none());
            assert!(service.update(id, owner, patch()).await.unwrap().is_none());
            assert!(!service.delete(id, owner).await.unwrap());
            assert!(!service.toggle_active(id, owner).await.unwrap());
        }
    }
}
