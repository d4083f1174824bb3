use std::{net::SocketAddr, str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

// Ajustes del pool compartido: 20 abiertas, 5 mínimas, 60 min de vida, 10 min inactivas
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 5,
            max_lifetime: Duration::from_secs(60 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }
}

// Se construye una sola vez en main y se pasa a cada componente
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Separado de from_env para poder probarlo sin tocar el entorno del proceso
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let mut database = DatabaseConfig::new(required("DATABASE_URL")?);
        database.max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", database.max_connections)?;
        database.min_connections =
            parse_or(&lookup, "DB_MIN_CONNECTIONS", database.min_connections)?;
        database.max_lifetime = Duration::from_secs(parse_or(
            &lookup,
            "DB_MAX_LIFETIME_SECS",
            database.max_lifetime.as_secs(),
        )?);
        database.idle_timeout = Duration::from_secs(parse_or(
            &lookup,
            "DB_IDLE_TIMEOUT_SECS",
            database.idle_timeout.as_secs(),
        )?);

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: database.min_connections.to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            api_key: required("API_KEY")?,
            database,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "HOST",
            value: self.host.clone(),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_required_keys_are_set() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/data"),
            ("API_KEY", "RAHASIA"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_key, "RAHASIA");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.database.max_lifetime, Duration::from_secs(3600));
        assert_eq!(config.database.idle_timeout, Duration::from_secs(600));
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/data",
        )]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("API_KEY"));
    }

    #[test]
    fn blank_database_url_counts_as_missing() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "  "),
            ("API_KEY", "RAHASIA"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn bad_port_names_the_key() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/data"),
            ("API_KEY", "RAHASIA"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn min_connections_cannot_exceed_max() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/data"),
            ("API_KEY", "RAHASIA"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "4"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MIN_CONNECTIONS", .. }));
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/data"),
            ("API_KEY", "RAHASIA"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8081");
    }
}
