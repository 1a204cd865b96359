use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ServiceId, ValidatedJson};
use crate::routes::run_blocking;
use crate::services::service_records;
use crate::state::app_state::AppState;

async fn list_services(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stores = app_state.stores.clone();
    let services = run_blocking(move || Ok(service_records::list(&stores))).await?;

    debug!(username = %user.username, count = services.len(), "listed services");
    Ok(HttpResponse::Ok().json(services))
}

async fn get_service(
    _user: CurrentUser,
    id: ServiceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stores = app_state.stores.clone();
    let service = run_blocking(move || service_records::get(&stores, id.0)).await?;

    Ok(HttpResponse::Ok().json(service))
}

async fn create_service(
    user: CurrentUser,
    body: ValidatedJson<Value>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stores = app_state.stores.clone();
    let body = body.into_inner();
    let service =
        run_blocking(move || service_records::create(&stores, body, SystemTime::now())).await?;

    debug!(username = %user.username, id = service.id, "created service");
    Ok(HttpResponse::Created().json(service))
}

async fn update_service(
    _user: CurrentUser,
    id: ServiceId,
    body: ValidatedJson<Value>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stores = app_state.stores.clone();
    let body = body.into_inner();
    let service = run_blocking(move || service_records::update(&stores, id.0, body)).await?;

    Ok(HttpResponse::Ok().json(service))
}

async fn delete_service(
    user: CurrentUser,
    id: ServiceId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stores = app_state.stores.clone();
    let removed = run_blocking(move || service_records::delete(&stores, id.0)).await?;

    debug!(username = %user.username, id = removed.id, "deleted service");
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_services))
            .route(web::post().to(create_service)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_service))
            .route(web::put().to(update_service))
            .route(web::delete().to(delete_service)),
    );
}
