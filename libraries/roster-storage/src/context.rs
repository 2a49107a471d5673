use crate::{cursor, users};
use async_trait::async_trait;
use roster_core::{
    error::{Result, RosterError},
    traits::UserRepository,
    types::*,
};
use sqlx::SqlitePool;

/// User repository backed by a local `SQLite` pool
#[derive(Debug, Clone)]
pub struct LocalUserRepository {
    pool: SqlitePool,
}

impl LocalUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn expect_single_row(affected: u64) -> Result<()> {
    if affected == 1 {
        Ok(())
    } else {
        Err(RosterError::UnexpectedRowsAffected(affected))
    }
}

fn log_failure(operation: &'static str) -> impl FnOnce(RosterError) -> RosterError {
    move |err| {
        if matches!(err, RosterError::Database(_)) {
            tracing::error!(operation, error = %err, "user query failed");
        }
        err
    }
}

#[async_trait]
impl UserRepository for LocalUserRepository {
    async fn fetch(&self, cursor: &str, num: i64) -> Result<UserPage> {
        let after = cursor::decode_cursor(cursor)?;

        let users = users::get_page(&self.pool, after, num)
            .await
            .map_err(log_failure("fetch"))?;

        let next_cursor = match users.last() {
            Some(last) if users.len() as i64 == num => Some(cursor::encode_cursor(last.created_at)),
            _ => None,
        };

        Ok(UserPage { users, next_cursor })
    }

    async fn get_by_id(&self, id: UserId) -> Result<User> {
        users::get_by_id(&self.pool, id)
            .await
            .map_err(log_failure("get_by_id"))?
            .ok_or(RosterError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<User> {
        users::get_by_email(&self.pool, email)
            .await
            .map_err(log_failure("get_by_email"))?
            .ok_or(RosterError::NotFound)
    }

    async fn create(&self, user: &mut User) -> Result<()> {
        user.id = users::create(&self.pool, user)
            .await
            .map_err(log_failure("create"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let affected = users::update(&self.pool, user)
            .await
            .map_err(log_failure("update"))?;
        expect_single_row(affected)
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        let affected = users::delete(&self.pool, id)
            .await
            .map_err(log_failure("delete"))?;
        expect_single_row(affected)
    }
}
