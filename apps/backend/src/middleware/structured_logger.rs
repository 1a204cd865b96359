//! Access log: one `request_completed` event per request.
//!
//! Besides method, path and status the event names the matched route
//! pattern (`/services/{id}` rather than `/services/17`) and, on the
//! authenticated scope, the `username` that `JwtExtract` verified. Rejected
//! and public requests log without a username.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::auth::claims::AuthClaims;
use crate::web::trace_ctx::UNKNOWN_TRACE_ID;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Everything the access log line carries.
struct Completed {
    method: String,
    path: String,
    route: Option<String>,
    status: StatusCode,
    duration_us: u64,
    trace_id: String,
    username: Option<String>,
}

impl Completed {
    fn emit(&self) {
        let route = self.route.as_deref().unwrap_or(self.path.as_str());
        let username = self.username.as_deref();
        let status_code = self.status.as_u16();
        let duration_us = self.duration_us;

        if self.status.is_server_error() {
            error!(http.method = %self.method, url.path = %self.path, http.route = %route, http.status_code = status_code, duration_us, trace_id = %self.trace_id, username, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %self.method, url.path = %self.path, http.route = %route, http.status_code = status_code, duration_us, trace_id = %self.trace_id, username, "request_completed");
        } else {
            info!(http.method = %self.method, url.path = %self.path, http.route = %route, http.status_code = status_code, duration_us, trace_id = %self.trace_id, username, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Claims are inserted further in, on the same request.
            let (status, route, username) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_pattern(),
                    res.request()
                        .extensions()
                        .get::<AuthClaims>()
                        .map(|claims| claims.username.clone()),
                ),
                Err(err) => (err.as_response_error().status_code(), None, None),
            };

            Completed {
                method,
                path,
                route,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id,
                username,
            }
            .emit();

            result
        })
    }
}
