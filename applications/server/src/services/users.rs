/// User use cases - business rules above the repository
use async_trait::async_trait;
use chrono::Utc;
use roster_core::{Result, RosterError, User, UserId, UserPage, UserRepository, UserUsecase};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    timeout: Duration,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    fn deadline(&self) -> Instant {
        Instant::now() + self.timeout
    }
}

/// Run `call` until `deadline`, dropping it (and its query) once the deadline passes
async fn bounded<T>(deadline: Instant, call: impl Future<Output = Result<T>>) -> Result<T> {
    match timeout_at(deadline, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("repository call exceeded its deadline");
            Err(RosterError::Timeout)
        }
    }
}

#[async_trait]
impl UserUsecase for UserService {
    async fn fetch(&self, cursor: &str, num: i64) -> Result<UserPage> {
        let num = if num <= 0 { DEFAULT_PAGE_SIZE } else { num };
        bounded(self.deadline(), self.repository.fetch(cursor, num)).await
    }

    async fn get_by_id(&self, id: UserId) -> Result<User> {
        bounded(self.deadline(), self.repository.get_by_id(id)).await
    }

    async fn get_by_email(&self, email: &str) -> Result<User> {
        bounded(self.deadline(), self.repository.get_by_email(email)).await
    }

    async fn update(&self, user: &mut User) -> Result<()> {
        user.updated_at = Utc::now();
        bounded(self.deadline(), self.repository.update(user)).await
    }

    async fn signup(&self, user: &mut User) -> Result<()> {
        let deadline = self.deadline();

        match bounded(deadline, self.repository.get_by_email(&user.email)).await {
            Ok(existing) => {
                tracing::warn!(email = %user.email, existing_id = existing.id, "email already registered");
                return Err(RosterError::Conflict);
            }
            Err(RosterError::NotFound) => {}
            Err(err) => return Err(err),
        }

        let now = Utc::now();
        user.created_at = now;
        user.updated_at = now;
        bounded(deadline, self.repository.create(user)).await
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        let deadline = self.deadline();

        bounded(deadline, self.repository.get_by_id(id)).await?;
        bounded(deadline, self.repository.delete(id)).await
    }
}
