use std::path::PathBuf;

use crate::config::app::DEFAULT_DATA_DIR;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::store::Stores;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    data_dir: PathBuf,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        if self.security_config.jwt_secret.is_empty() {
            return Err(AppError::config("token secret must not be empty"));
        }
        // A data dir that exists but is not a directory would fail every write.
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(AppError::config(format!(
                "data dir {} is not a directory",
                self.data_dir.display()
            )));
        }

        let stores = Stores::open(&self.data_dir);
        Ok(AppState::new(stores, self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
