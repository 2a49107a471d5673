//! User table queries

use chrono::{DateTime, Utc};
use roster_core::{error::Result, types::*};
use sqlx::SqlitePool;

/// Get up to `limit` users created strictly after `after`, oldest first
///
/// `None` starts from the first user.
pub async fn get_page(
    pool: &SqlitePool,
    after: Option<DateTime<Utc>>,
    limit: i64,
) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, password, email, updated_at, created_at
         FROM user
         WHERE (?1 IS NULL OR created_at > ?1)
         ORDER BY created_at
         LIMIT ?2",
    )
    .bind(after)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, password, email, updated_at, created_at
         FROM user
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, password, email, updated_at, created_at
         FROM user
         WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user and return the generated ID
pub async fn create(pool: &SqlitePool, user: &User) -> Result<UserId> {
    let result = sqlx::query(
        "INSERT INTO user (name, password, email, updated_at, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.name)
    .bind(&user.password)
    .bind(&user.email)
    .bind(user.updated_at)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Update name, password, email and `updated_at`, returning the affected row count
pub async fn update(pool: &SqlitePool, user: &User) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE user
         SET name = ?, password = ?, email = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(&user.name)
    .bind(&user.password)
    .bind(&user.email)
    .bind(user.updated_at)
    .bind(user.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a user, returning the affected row count
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
