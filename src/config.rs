use std::env;

use log::debug;

use crate::error::{CareError, Result};

pub const DEFAULT_DATABASE_URL: &str = "caretrack.db";

const UNSUPPORTED_SCHEMES: [&str; 3] = ["postgres://", "postgresql://", "mysql://"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path (or `file:` URI) of the SQLite database.
    pub database_url: String,
}

impl Config {
    // Call dotenvy::dotenv() first if a .env file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("DATABASE_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let database_url = match raw {
            Some(url) => normalize_database_url(&url)?,
            None => DEFAULT_DATABASE_URL.to_string(),
        };
        debug!("Using database {}", database_url);

        Ok(Config { database_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

fn normalize_database_url(url: &str) -> Result<String> {
    if UNSUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(CareError::Config(format!(
            "DATABASE_URL must point to a SQLite file, got {url}"
        )));
    }
    let path = url.strip_prefix("sqlite://").unwrap_or(url);
    if path.is_empty() {
        return Err(CareError::Config("DATABASE_URL has an empty path".into()));
    }
    Ok(path.to_string())
}
