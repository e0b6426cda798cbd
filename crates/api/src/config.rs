use std::str::FromStr;

use anyhow::Context;

use crate::logging::LogFormat;

/// Origins allowed by default: the local frontend and the API itself.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5000,http://127.0.0.1:3000,http://127.0.0.1:5000";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: `pretty`).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                 |
    /// |------------------------|-----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                               |
    /// | `PORT`                 | `5000`                                  |
    /// | `CORS_ORIGINS`         | localhost / 127.0.0.1 on ports 3000, 5000 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                    |
    /// | `LOG_FORMAT`           | `pretty` (`json` also accepted)         |
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .context("PORT must be a valid u16")?;

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .context("REQUEST_TIMEOUT_SECS must be a valid u64")?;

        let log_format = LogFormat::from_str(&env_or("LOG_FORMAT", "pretty"))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            request_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn default_config_allows_local_frontend() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert!(config
            .cors_origins
            .contains(&"http://localhost:3000".to_string()));
        assert_eq!(config.cors_origins.len(), 4);
    }
}
