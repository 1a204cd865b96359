//! Unique test data, so tests sharing a data directory never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("svc");
/// let b = unique_str("svc");
/// assert_ne!(a, b);
/// assert!(a.starts_with("svc-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique username. Lowercased so it reads like something a person typed.
pub fn unique_username(prefix: &str) -> String {
    unique_str(prefix).to_lowercase()
}
