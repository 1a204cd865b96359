//! Runtime configuration.
//!
//! Values come from the process environment, falling back to a simple
//! `KEY=value` file (usually `.env`). The environment always wins. The result
//! is an explicit [`AppConfig`] handed to the state builder; nothing below the
//! bootstrap reads the environment on its own.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const HOST_KEY: &str = "SERVICEBOOK_HOST";
pub const PORT_KEY: &str = "PORT";
pub const JWT_SECRET_KEY: &str = "JWT_SECRET";
pub const DATA_DIR_KEY: &str = "SERVICEBOOK_DATA_DIR";
pub const CORS_ORIGINS_KEY: &str = "CORS_ALLOWED_ORIGINS";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("failed to read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub data_dir: PathBuf,
    pub cors_allowed_origins: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"[REDACTED]")
            .field("data_dir", &self.data_dir)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl AppConfig {
    /// Load from `env_file` (if it exists) overlaid by the process environment.
    pub fn load(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(env_file.as_ref())?;
        Self::from_sources(&file_vars, |key| std::env::var(key).ok())
    }

    /// Build from explicit sources; `env` takes precedence over `file_vars`.
    pub fn from_sources<F>(file_vars: &HashMap<String, String>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).or_else(|| file_vars.get(key).cloned());

        let jwt_secret = lookup(JWT_SECRET_KEY)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(JWT_SECRET_KEY))?;

        let port = match lookup(PORT_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    key: PORT_KEY,
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup(HOST_KEY).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            jwt_secret,
            data_dir: lookup(DATA_DIR_KEY)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            cors_allowed_origins: parse_origins(&lookup(CORS_ORIGINS_KEY).unwrap_or_default()),
        })
    }
}

/// Read `KEY=value` pairs. A missing file is an empty source.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let env_file_error = |e: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(HashMap::new()),
        Err(e) => return Err(env_file_error(e)),
    };

    iter.map(|item| item.map_err(env_file_error)).collect()
}

/// Comma-separated origins; blanks, `null`, and non-http(s) entries are dropped.
/// Falls back to the local development origins when nothing valid remains.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}
