//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Username accepted by the basic auth gate.
    pub auth_username: String,
    /// Password accepted by the basic auth gate.
    pub auth_password: String,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("USER_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("USER_API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            auth_username: env::var("USER_API_AUTH_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            auth_password: env::var("USER_API_AUTH_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),
            log_level: env::var("USER_API_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Clear any existing env vars
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("USER_API_HOST");
            env::remove_var("USER_API_PORT");
            env::remove_var("USER_API_AUTH_USERNAME");
            env::remove_var("USER_API_AUTH_PASSWORD");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.auth_username, "admin");
        assert_eq!(config.auth_password, "password");
    }
}
