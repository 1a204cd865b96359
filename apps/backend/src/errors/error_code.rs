//! Error codes for the servicebook API.
//!
//! Every code that can appear in a Problem Details body is listed here.
//! Never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes. Each variant maps to one SCREAMING_SNAKE_CASE
/// string in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token failed verification (forged, tampered, expired, malformed)
    UnauthorizedInvalidJwt,
    /// Username/password pair did not match a stored user
    InvalidCredentials,

    // Request validation
    /// Required field missing or empty
    ValidationError,
    /// Body could not be parsed
    BadRequest,
    /// Path parameter is not a valid service id
    InvalidServiceId,

    // Not found
    /// Service record does not exist
    ServiceNotFound,
    /// Generic not found
    NotFound,

    // Conflicts
    /// Username already registered
    UsernameTaken,
    /// Generic conflict
    Conflict,

    // System
    /// Reading or writing a collection file failed
    StorageError,
    /// Token could not be signed
    TokenSigning,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidServiceId => "INVALID_SERVICE_ID",

            Self::ServiceNotFound => "SERVICE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::StorageError => "STORAGE_ERROR",
            Self::TokenSigning => "TOKEN_SIGNING",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
