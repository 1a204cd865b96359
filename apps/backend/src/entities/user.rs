use serde::{Deserialize, Serialize};

/// A registered user. The username is the unique key and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Hex SHA-256 of the password
    pub password_hash: String,
}
