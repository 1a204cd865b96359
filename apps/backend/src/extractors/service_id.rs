use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Service id taken from the `{id}` route segment.
///
/// Only the shape is checked here; whether the record exists is decided by
/// the services layer against the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceId(pub i64);

impl FromRequest for ServiceId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_service_id(req.match_info().get("id")))
    }
}

fn parse_service_id(raw: Option<&str>) -> Result<ServiceId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidServiceId, "Missing service id parameter")
    })?;

    raw.parse::<i64>().map(ServiceId).map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidServiceId,
            format!("Invalid service id: {raw}"),
        )
    })
}
