mod user;

pub use user::{User, UserId, UserPage};
