use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::todont::errors::TitleError;
use crate::domain::user::models::UserId;

/// A "don't do" list entry.
///
/// Visible and mutable only through operations scoped to its owning user;
/// `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDont {
    pub id: TodontId,
    pub title: Title,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
    pub images: Vec<Image>,
}

/// Image metadata attached to an item. Passive record only; storage and
/// streaming live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: i64,
    pub file_name: String,
    pub todont_id: Option<TodontId>,
}

/// Item unique identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodontId(pub i64);

impl TodontId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Store-assigned ids are positive; anything else can only be a
    /// not-found result.
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for TodontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Title value type, 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Empty` - Title is empty
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        let length = title.chars().count();
        if length == 0 {
            Err(TitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create an item for its owner.
///
/// The owner id is whatever identity the access boundary verified; the
/// service trusts it.
#[derive(Debug)]
pub struct CreateTodontCommand {
    pub title: Title,
    pub is_active: bool,
    pub user_id: UserId,
}

/// Patch applied by update: title and active flag, nothing else.
#[derive(Debug)]
pub struct UpdateTodontCommand {
    pub title: Title,
    pub is_active: bool,
}

/// An item with timestamps stamped, pending persistence; the store
/// assigns the id.
#[derive(Debug, Clone)]
pub struct NewTodont {
    pub title: Title,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: UserId,
}
