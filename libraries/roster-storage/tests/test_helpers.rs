//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and indexes.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use roster_core::types::User;
use roster_storage::LocalUserRepository;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = roster_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");

        roster_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over this database
    pub fn repository(&self) -> LocalUserRepository {
        LocalUserRepository::new(self.pool.clone())
    }
}

/// Fixed base instant so pagination order is deterministic
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Test fixture: a user created `offset_secs` after `base_time`
pub fn test_user(index: usize, offset_secs: i64) -> User {
    let at = base_time() + Duration::seconds(offset_secs);
    User {
        id: 0,
        name: format!("user {}", index),
        password: format!("password {}", index),
        email: format!("user{}@example.com", index),
        updated_at: at,
        created_at: at,
    }
}

/// Test fixture: insert `count` users one second apart, returning them with IDs
pub async fn seed_users(pool: &SqlitePool, count: usize) -> Vec<User> {
    let mut seeded = Vec::with_capacity(count);
    for index in 0..count {
        let mut user = test_user(index, index as i64);
        user.id = roster_storage::users::create(pool, &user)
            .await
            .expect("Failed to create test user");
        seeded.push(user);
    }
    seeded
}
