//! Bearer-token middleware for the `/services` scope.
//!
//! Verifies `Authorization: Bearer <token>` and stores the resulting
//! [`AuthClaims`] in request extensions. Requests without a valid token never
//! reach the handlers; they get a 401 Problem Details response from here.

use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::claims::AuthClaims;
use crate::auth::token::verify_token;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

pub struct JwtExtract;

impl<S, B> Transform<S, ServiceRequest> for JwtExtract
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtExtractMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtExtractMiddleware { service }))
    }
}

pub struct JwtExtractMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtExtractMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            // Rendered when polled, which happens inside the request's trace scope.
            Err(err) => Box::pin(async move { Ok(req.error_response(err).map_into_right_body()) }),
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthClaims, AppError> {
    let token = bearer_token(req.headers().get(header::AUTHORIZATION))?;

    let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        AppError::internal(ErrorCode::Internal, "AppState not available")
    })?;

    let claims = verify_token(token, SystemTime::now(), &app_state.security).map_err(|_| {
        debug!(path = %req.path(), "bearer token rejected");
        AppError::unauthorized_invalid_jwt()
    })?;

    AuthClaims::from_claims(&claims).ok_or_else(AppError::unauthorized_invalid_jwt)
}

/// Parse `Bearer <token>`; anything else is a missing bearer.
pub fn bearer_token(header_value: Option<&header::HeaderValue>) -> Result<&str, AppError> {
    let value = header_value
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::unauthorized_missing_bearer)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}
