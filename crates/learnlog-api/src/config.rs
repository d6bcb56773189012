//! Server configuration loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `postgres://localhost/learnlog` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `ALLOWED_ORIGINS` | `http://localhost:5173` |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `GITHUB_CLIENT_ID` | required |
//! | `GITHUB_CLIENT_SECRET` | required |
//! | `GITHUB_TOKEN_URL` | `https://github.com/login/oauth/access_token` |

use learnlog_core::{defaults, Error, Result};

use crate::services::github_oauth::GitHubOAuthConfig;

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
    pub db_max_connections: u32,
    pub github: GitHubOAuthConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {}", raw)))?,
            None => defaults::PORT,
        };
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                Error::Config(format!("DB_MAX_CONNECTIONS is not a number: {}", raw))
            })?,
            None => defaults::DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| defaults::ALLOWED_ORIGINS.to_string()),
            db_max_connections,
            github: GitHubOAuthConfig::from_lookup(&lookup)?,
        })
    }
}
