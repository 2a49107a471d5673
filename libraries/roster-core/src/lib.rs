//! Roster Core
//!
//! Storage-agnostic domain types, contracts, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserPage`
//! - **Core Traits**: `UserRepository` (data access) and `UserUsecase` (business rules)
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{RosterError, User};
//!
//! let user = User::new("Alice", "secret", "alice@example.com");
//! assert_eq!(user.id, 0);
//!
//! let err = RosterError::NotFound;
//! assert_eq!(err.to_string(), "your requested item is not found");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use traits::{UserRepository, UserUsecase};
pub use types::{User, UserId, UserPage};

#[cfg(feature = "mock")]
pub use traits::{MockUserRepository, MockUserUsecase};
