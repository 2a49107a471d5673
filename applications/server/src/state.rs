/// Shared application state
use roster_core::UserUsecase;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserUsecase>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserUsecase>) -> Self {
        Self { users }
    }
}
