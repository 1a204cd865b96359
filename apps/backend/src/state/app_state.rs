use super::security_config::SecurityConfig;
use crate::store::Stores;

/// Application state shared by all workers through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Collection files backing services and users
    pub stores: Stores,
    /// Token signing configuration
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(stores: Stores, security: SecurityConfig) -> Self {
        Self { stores, security }
    }
}
