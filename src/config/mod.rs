pub mod app_config;
pub mod database;

pub use app_config::AppConfig;
pub use database::{run_migrations, DatabaseConfig};
