/// Server services
pub mod users;

pub use users::{UserService, DEFAULT_PAGE_SIZE};
