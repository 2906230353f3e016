//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt;

use crate::constants::DEFAULT_HTTP_PORT;

/// Parse a variable through `lookup` with a default fallback.
///
/// - If the variable is not set or empty: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
fn parse_with_default<T, F>(lookup: &F, var: &str, default: T) -> T
where
    T: std::str::FromStr + fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var).filter(|v| !v.is_empty()) {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

fn string_with_default<F>(lookup: &F, var: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_owned())
}

/// Connection settings for the MySQL-compatible datastore.
///
/// Read from `DATABASE_USER`, `DATABASE_PASSWORD`, `DATABASE_HOST`,
/// `DATABASE_PORT` and `DATABASE_NAME`.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            user: string_with_default(&lookup, "DATABASE_USER", "root"),
            password: string_with_default(&lookup, "DATABASE_PASSWORD", ""),
            host: string_with_default(&lookup, "DATABASE_HOST", "127.0.0.1"),
            port: parse_with_default(&lookup, "DATABASE_PORT", 3306),
            name: string_with_default(&lookup, "DATABASE_NAME", "sample_crud"),
        }
    }

    /// Connection URL with the password masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        let password = if self.password.is_empty() { "" } else { ":***" };
        format!("mysql://{}{password}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .finish()
    }
}

/// HTTP listener settings. `PORT` selects the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: "0.0.0.0".to_owned(),
            port: parse_with_default(&lookup, "PORT", DEFAULT_HTTP_PORT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
