use serde::Deserialize;
use std::net::SocketAddr;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Document root for static assets
    pub static_dir: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the default "config" file (if present),
    /// environment variables, and built-in defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> crate::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER").separator("_"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "public")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?;

        // A bare PORT variable (Heroku style) wins over file and defaults
        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => {
                    builder = builder.set_override("server.port", i64::from(port))?;
                }
                Err(_) => {
                    crate::logger::log_warning(&format!("Ignoring invalid PORT value: '{port}'"));
                }
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> crate::Result<SocketAddr> {
        Ok(format!("{}:{}", self.server.host, self.server.port).parse()?)
    }
}

/// Application state shared by all request handlers.
///
/// Immutable after startup, so handlers need no locks.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
                static_dir: "public".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: true,
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = sample_config().get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut config = sample_config();
        config.server.host = "not a host".to_string();
        assert!(config.get_socket_addr().is_err());
    }
}
