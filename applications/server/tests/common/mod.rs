//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::{body::Body, http::Request, response::Response, Router};
use roster_core::UserUsecase;
use roster_server::{create_router, services::UserService, state::AppState};
use roster_storage::LocalUserRepository;
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Test timeout, generous enough for a cold SQLite file
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Router over a real file-backed database; keep the `TempDir` alive for the test
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<LocalUserRepository>,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Create a test app with migrations applied
    pub async fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = roster_storage::create_pool(&db_url, 5).await?;
        roster_storage::run_migrations(&pool).await?;

        let repository = Arc::new(LocalUserRepository::new(pool));
        let service = UserService::new(repository.clone(), TEST_TIMEOUT);

        Ok(Self {
            router: create_router(AppState::new(Arc::new(service))),
            repository,
            _temp_dir: temp_dir,
        })
    }

    /// Send one request through the router
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Router over an arbitrary use case (e.g. a mock)
pub fn router_with(users: impl UserUsecase + 'static) -> Router {
    create_router(AppState::new(Arc::new(users)))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Test user credentials
pub mod fixtures {
    pub const TEST_NAME: &str = "A";
    pub const TEST_PASSWORD: &str = "p";
    pub const TEST_EMAIL: &str = "a@x.com";
}
