use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::todont::models::ToDont;
use crate::domain::todont::models::Title;
use crate::domain::todont::models::TodontId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserWithTodonts;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Items for the profile view. Image rows are not fetched here; the
    /// profile only reports the item collection itself.
    async fn load_todonts(&self, user_id: i64) -> Result<Vec<ToDont>, UserError> {
        let rows = sqlx::query_as::<_, TodontRow>(
            r#"
            SELECT id, title, is_active, created_at, updated_at, user_id
            FROM todonts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|r| {
                Ok(ToDont {
                    id: TodontId(r.id),
                    title: Title::new(r.title)
                        .map_err(|e| UserError::DatabaseError(e.to_string()))?,
                    is_active: r.is_active,
                    created_at: r.created_at,
                    updated_at: r.updated_at,
                    user_id: UserId(r.user_id),
                    images: vec![],
                })
            })
            .collect()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            password_hash: self.password_hash,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TodontRow {
    id: i64,
    title: String,
    is_active: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    user_id: i64,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(User {
            id: UserId(id),
            username: user.username,
            password_hash: user.password_hash,
        })
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_id_with_todonts(
        &self,
        id: UserId,
    ) -> Result<Option<UserWithTodonts>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = row.into_user()?;
        let todonts = self.load_todonts(user.id.as_i64()).await?;

        Ok(Some(UserWithTodonts { user, todonts }))
    }

    async fn find_by_username_with_todonts(
        &self,
        username: &Username,
    ) -> Result<Option<UserWithTodonts>, UserError> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(None);
        };

        let todonts = self.load_todonts(user.id.as_i64()).await?;

        Ok(Some(UserWithTodonts { user, todonts }))
    }
}
