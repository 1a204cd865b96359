use actix_web::web;
use tracing::{error, Span};

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::middleware::jwt_extract::JwtExtract;

pub mod auth;
pub mod health;
pub mod services;

/// Run file-backed store work off the async workers.
///
/// The request span is re-entered on the blocking thread so anything the
/// services layer logs still carries the trace id.
pub(crate) async fn run_blocking<F, T>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    let span = Span::current();
    let outcome = web::block(move || {
        let _entered = span.enter();
        work()
    })
    .await
    .map_err(|e| {
        error!(error = %e, "blocking store task failed");
        AppError::internal(ErrorCode::Internal, format!("blocking task failed: {e}"))
    })?;

    outcome.map_err(AppError::from)
}

/// Register every route the backend serves.
///
/// `/services` sits behind `JwtExtract`; everything else is public.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .service(
            web::scope("/services")
                .wrap(JwtExtract)
                .configure(services::configure_routes),
        );
}
