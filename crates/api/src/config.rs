use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Deployment environment, from `APP_ENV`.
///
/// Only the exact value `development` enables the dev-login route and
/// insecure cookies; anything else is treated as production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Session cookie and lifetime settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie name (default: `monastery.sid`).
    pub cookie_name: String,
    /// Session lifetime in days (default: `30`).
    pub ttl_days: i64,
    /// How often expired sessions are purged, in seconds (default: `900`).
    pub sweep_interval_secs: u64,
    /// Mark the cookie `Secure`. Off in development so plain-HTTP local
    /// servers keep working.
    pub secure: bool,
}

/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// PostgreSQL connection string (required).
    pub database_url: String,
    /// Maximum pooled connections (default: `10`).
    pub database_max_connections: u32,
    pub environment: AppEnvironment,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                 |
    /// |-------------------------------|-------------------------|
    /// | `HOST`                        | `0.0.0.0`               |
    /// | `PORT`                        | `5000`                  |
    /// | `DATABASE_URL`                | required                |
    /// | `DATABASE_MAX_CONNECTIONS`    | `10`                    |
    /// | `APP_ENV`                     | `production`            |
    /// | `CORS_ORIGINS`                | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                    |
    /// | `SESSION_COOKIE_NAME`         | `monastery.sid`         |
    /// | `SESSION_TTL_DAYS`            | `30`                    |
    /// | `SESSION_SWEEP_INTERVAL_SECS` | `900`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", var("PORT", "5000"))?;
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections =
            parse("DATABASE_MAX_CONNECTIONS", var("DATABASE_MAX_CONNECTIONS", "10"))?;

        let environment = if var("APP_ENV", "production") == "development" {
            AppEnvironment::Development
        } else {
            AppEnvironment::Production
        };

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs =
            parse("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;

        let ttl_days: i64 = parse("SESSION_TTL_DAYS", var("SESSION_TTL_DAYS", "30"))?;
        if ttl_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_DAYS",
                value: ttl_days.to_string(),
                reason: "must be positive".into(),
            });
        }

        let sweep_interval_secs: u64 = parse(
            "SESSION_SWEEP_INTERVAL_SECS",
            var("SESSION_SWEEP_INTERVAL_SECS", "900"),
        )?;
        if sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_SWEEP_INTERVAL_SECS",
                value: "0".into(),
                reason: "must be positive".into(),
            });
        }

        let session = SessionConfig {
            cookie_name: var("SESSION_COOKIE_NAME", "monastery.sid"),
            ttl_days,
            sweep_interval_secs,
            secure: !environment.is_development(),
        };

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            environment,
            cors_origins,
            request_timeout_secs,
            session,
        })
    }
}

fn parse<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
