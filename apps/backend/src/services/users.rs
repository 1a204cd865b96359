use std::time::SystemTime;

use serde_json::Value;
use tracing::{debug, info};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::{issue_token, Claims};
use crate::entities::User;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::repos::users::find_by_username;
use crate::state::security_config::SecurityConfig;
use crate::store::{Mutation, Stores};

/// Claim naming the authenticated user inside issued tokens.
pub const USERNAME_CLAIM: &str = "username";

fn require_present(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Register a new user. The password is stored only as its digest.
pub fn register(stores: &Stores, username: &str, password: &str) -> Result<User, DomainError> {
    require_present("username", username)?;
    require_present("password", password)?;

    let user = User {
        username: username.to_string(),
        password_hash: hash_password(password),
    };

    let user = stores.users.update(|users| {
        if find_by_username(users, username).is_some() {
            return Mutation::Skip(Err(DomainError::conflict(
                ConflictKind::UniqueUsername,
                format!("username '{username}' is already registered"),
            )));
        }
        users.push(user.clone());
        Mutation::Write(Ok(user))
    })??;

    info!(username = %username, "user registered");
    Ok(user)
}

/// Check a username/password pair and issue a token carrying the username.
///
/// Blank fields, unknown users and wrong passwords all produce the same
/// error.
pub fn login(
    stores: &Stores,
    security: &SecurityConfig,
    username: &str,
    password: &str,
    now: SystemTime,
) -> Result<String, DomainError> {
    let blank = username.trim().is_empty() || password.trim().is_empty();
    let authenticated = !blank && {
        let users = stores.users.load();
        find_by_username(&users, username)
            .is_some_and(|user| verify_password(password, &user.password_hash))
    };
    if !authenticated {
        debug!(username = %username, "login rejected");
        return Err(DomainError::Unauthorized);
    }

    let mut claims = Claims::new();
    claims.insert(USERNAME_CLAIM.to_string(), Value::from(username));
    let token = issue_token(&claims, now, security)
        .map_err(|e| DomainError::infra(InfraErrorKind::TokenSigning, e.to_string()))?;

    info!(username = %username, "user logged in");
    Ok(token)
}
