pub mod admin;
pub mod user;

pub use admin::Admin;
pub use user::{Role, User};
