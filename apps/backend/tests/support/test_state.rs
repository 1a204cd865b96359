use servicebook::infra::state::build_state;
use servicebook::state::app_state::AppState;
use servicebook::state::security_config::SecurityConfig;
use servicebook::AppError;
use tempfile::TempDir;

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// App state rooted in a private temporary data directory.
///
/// The directory lives as long as this value, so keep it bound for the
/// whole test.
pub struct TestState {
    pub state: AppState,
    pub security: SecurityConfig,
    pub dir: TempDir,
}

pub fn build_test_state() -> Result<TestState, AppError> {
    let dir = tempfile::tempdir()
        .map_err(|e| AppError::config(format!("failed to create temp data dir: {e}")))?;
    let security = SecurityConfig::new(TEST_SECRET);
    let state = build_state()
        .with_security(security.clone())
        .with_data_dir(dir.path())
        .build()?;

    Ok(TestState {
        state,
        security,
        dir,
    })
}
