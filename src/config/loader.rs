//! Load config from environment variables (after `.env`, when the binary loads one).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_opt("PORT", get("PORT"))?.unwrap_or(DEFAULT_PORT),
            base_path: normalize_base_path(get("BASE_PATH").as_deref().unwrap_or(DEFAULT_BASE_PATH)),
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            user: get("DB_USER"),
            host: get("DB_HOST"),
            database: get("DB_DATABASE"),
            password: get("DB_PASSWORD"),
            port: parse_opt("DB_PORT", get("DB_PORT"))?,
            max_connections: parse_opt("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"))?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(AppConfig { server, database })
    }
}

fn parse_opt<T: FromStr>(key: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|v| {
        v.trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: v.clone() })
    })
    .transpose()
}

/// "/api/posts/" -> "/api/posts", "api" -> "/api", "" or "/" -> "/".
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}
