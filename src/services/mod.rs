pub mod admin_filter;
pub mod admin_service;

pub use admin_filter::{AdminField, AdminFilter};
pub use admin_service::AdminService;
