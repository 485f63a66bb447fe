use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let port = match cfg.get_int("PORT") {
            Ok(value) => u16::try_from(value)
                .map_err(|_| config::ConfigError::Message(format!("PORT out of range: {}", value)))?,
            Err(_) => 5000,
        };

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            environment: cfg.get_string("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            app_name: cfg.get_string("APP_NAME").unwrap_or_else(|_| "healthcare-backend".to_string()),
            app_version: cfg.get_string("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the PORT variable so runs can't race on it
    #[test]
    fn port_is_range_checked() {
        std::env::set_var("PORT", "8080");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.server_address(), format!("{}:8080", config.host));

        std::env::set_var("PORT", "70000");
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT out of range"));

        std::env::remove_var("PORT");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 5000);
    }
}
