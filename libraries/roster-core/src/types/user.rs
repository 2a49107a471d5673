/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned by storage on insert
pub type UserId = i64;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier (0 until stored)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Password, stored as given
    pub password: String,

    /// Contact email, unique across users
    pub email: String,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Account creation timestamp, used as the pagination key
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            password: password.into(),
            email: email.into(),
            updated_at: now,
            created_at: now,
        }
    }
}

/// One page of users plus the token for the page after it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    /// Users ordered by ascending creation time
    pub users: Vec<User>,

    /// Cursor for the next page, `None` once the end of data is reached
    pub next_cursor: Option<String>,
}
