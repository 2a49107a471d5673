/// Core traits for Roster
use crate::error::Result;
use crate::types::{User, UserId, UserPage};
use async_trait::async_trait;

/// User repository
///
/// Implementers run parameterized queries against the user table. Every
/// method is cancel-safe: dropping the returned future abandons the query.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch up to `num` users created strictly after the instant encoded
    /// in `cursor` (an empty cursor means from the beginning)
    ///
    /// # Errors
    /// Returns `BadInput` if `cursor` is non-empty and cannot be decoded
    async fn fetch(&self, cursor: &str, num: i64) -> Result<UserPage>;

    /// Get a user by ID
    async fn get_by_id(&self, id: UserId) -> Result<User>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> Result<User>;

    /// Insert a user, writing the generated ID back onto it
    async fn create(&self, user: &mut User) -> Result<()>;

    /// Update the mutable fields of the user with `user.id`
    ///
    /// # Errors
    /// Returns `UnexpectedRowsAffected` unless exactly one row changed
    async fn update(&self, user: &User) -> Result<()>;

    /// Delete a user by ID
    ///
    /// # Errors
    /// Returns `UnexpectedRowsAffected` unless exactly one row was removed
    async fn delete(&self, id: UserId) -> Result<()>;
}

/// User use cases
///
/// Business rules layered above a `UserRepository`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserUsecase: Send + Sync {
    /// Fetch a page of users; a non-positive `num` falls back to the default page size
    async fn fetch(&self, cursor: &str, num: i64) -> Result<UserPage>;

    /// Get a user by ID
    async fn get_by_id(&self, id: UserId) -> Result<User>;

    /// Get a user by email
    async fn get_by_email(&self, email: &str) -> Result<User>;

    /// Update a user, stamping `updated_at`
    async fn update(&self, user: &mut User) -> Result<()>;

    /// Register a new user
    ///
    /// # Errors
    /// Returns `Conflict` if the email is already registered
    async fn signup(&self, user: &mut User) -> Result<()>;

    /// Delete an existing user
    ///
    /// # Errors
    /// Returns `NotFound` if no user has this ID
    async fn delete(&self, id: UserId) -> Result<()>;
}
