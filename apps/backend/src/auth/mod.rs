pub mod claims;
pub mod password;
pub mod token;

pub use claims::AuthClaims;
pub use token::{issue_token, verify_token, Claims, TokenError};
