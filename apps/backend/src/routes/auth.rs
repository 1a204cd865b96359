use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::routes::run_blocking;
use crate::services::users;
use crate::state::app_state::AppState;

/// Body shared by `/register` and `/login`. Missing fields deserialize to
/// empty strings so the services layer reports them as validation errors.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

async fn register(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest { username, password } = body.into_inner();
    let stores = app_state.stores.clone();

    let user = run_blocking(move || users::register(&stores, &username, &password)).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        username: user.username,
    }))
}

async fn login(
    body: ValidatedJson<CredentialsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CredentialsRequest { username, password } = body.into_inner();
    let stores = app_state.stores.clone();
    let security = app_state.security.clone();

    let token = run_blocking(move || {
        users::login(&stores, &security, &username, &password, SystemTime::now())
    })
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/login").route(web::post().to(login)));
}
