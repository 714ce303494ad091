pub mod auth;
pub mod health;
pub mod posts;
pub mod system;
pub mod users;

pub use auth::{login, register};
pub use health::health_check;
pub use posts::list_posts;
pub use system::system_info;
pub use users::{get_user, list_users, search_users, update_profile};
