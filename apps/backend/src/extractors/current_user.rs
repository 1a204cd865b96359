use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::AuthClaims;
use crate::error::AppError;

/// The authenticated caller, as established by the `JwtExtract` middleware.
///
/// Only usable on routes behind `JwtExtract`; elsewhere it rejects with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<AuthClaims>()
            .map(|claims| CurrentUser {
                username: claims.username.clone(),
            })
            .ok_or_else(AppError::unauthorized_missing_bearer);
        ready(user)
    }
}
