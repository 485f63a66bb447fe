pub mod admin_handler;
pub mod health_handler;

pub use admin_handler::{create_admin, list_admins};
pub use health_handler::health_check;
