use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::todont::errors::TodontError;
use crate::domain::todont::models::Image;
use crate::domain::todont::models::NewTodont;
use crate::domain::todont::models::ToDont;
use crate::domain::todont::models::Title;
use crate::domain::todont::models::TodontId;
use crate::domain::todont::ports::TodontRepository;
use crate::domain::user::models::UserId;

/// Postgres adapter for items.
///
/// Every read and write repeats the owner predicate in SQL, so a row that
/// exists under another user is indistinguishable from no row at all.
pub struct PostgresTodontRepository {
    pool: PgPool,
}

impl PostgresTodontRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(
        &self,
        todont_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Image>>, TodontError> {
        if todont_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ImageRow>(
            r#"
            SELECT id, file_name, todont_id
            FROM images
            WHERE todont_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(todont_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        let mut by_todont: HashMap<i64, Vec<Image>> = HashMap::new();
        for row in rows {
            let Some(owner) = row.todont_id else {
                continue;
            };
            by_todont.entry(owner).or_default().push(Image {
                id: row.id,
                file_name: row.file_name,
                todont_id: Some(TodontId(owner)),
            });
        }

        Ok(by_todont)
    }
}

#[derive(sqlx::FromRow)]
struct TodontRow {
    id: i64,
    title: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: i64,
}

impl TodontRow {
    fn into_todont(self, images: Vec<Image>) -> Result<ToDont, TodontError> {
        Ok(ToDont {
            id: TodontId(self.id),
            title: Title::new(self.title)?,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user_id: UserId(self.user_id),
            images,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    id: i64,
    file_name: String,
    todont_id: Option<i64>,
}

#[async_trait]
impl TodontRepository for PostgresTodontRepository {
    async fn find_by_owner(&self, user_id: UserId) -> Result<Vec<ToDont>, TodontError> {
        let rows = sqlx::query_as::<_, TodontRow>(
            r#"
            SELECT id, title, is_active, created_at, updated_at, user_id
            FROM todonts
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut images = self.load_images(&ids).await?;

        rows.into_iter()
            .map(|r| {
                let attached = images.remove(&r.id).unwrap_or_default();
                r.into_todont(attached)
            })
            .collect()
    }

    async fn find_by_id(
        &self,
        id: TodontId,
        user_id: UserId,
    ) -> Result<Option<ToDont>, TodontError> {
        let row = sqlx::query_as::<_, TodontRow>(
            r#"
            SELECT id, title, is_active, created_at, updated_at, user_id
            FROM todonts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut images = self.load_images(&[row.id]).await?;
        let attached = images.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_todont(attached)?))
    }

    async fn create(&self, todont: NewTodont) -> Result<ToDont, TodontError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO todonts (title, is_active, created_at, updated_at, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(todont.title.as_str())
        .bind(todont.is_active)
        .bind(todont.created_at)
        .bind(todont.updated_at)
        .bind(todont.user_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        Ok(ToDont {
            id: TodontId(id),
            title: todont.title,
            is_active: todont.is_active,
            created_at: todont.created_at,
            updated_at: todont.updated_at,
            user_id: todont.user_id,
            images: vec![],
        })
    }

    async fn update(&self, todont: &ToDont) -> Result<bool, TodontError> {
        let result = sqlx::query(
            r#"
            UPDATE todonts
            SET title = $3, is_active = $4, updated_at = $5
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(todont.id.as_i64())
        .bind(todont.user_id.as_i64())
        .bind(todont.title.as_str())
        .bind(todont.is_active)
        .bind(todont.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: TodontId, user_id: UserId) -> Result<bool, TodontError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todonts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| TodontError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
