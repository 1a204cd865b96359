use actix_web::{web, App, HttpServer};
use servicebook::config::AppConfig;
use servicebook::infra::state::build_state;
use servicebook::middleware::cors::cors_middleware;
use servicebook::middleware::request_trace::RequestTrace;
use servicebook::middleware::structured_logger::StructuredLogger;
use servicebook::middleware::trace_span::TraceSpan;
use servicebook::routes;
use servicebook::state::security_config::SecurityConfig;
use servicebook::telemetry;
use tracing::{error, info};

/// Overrides the path of the `KEY=value` file read at startup.
const ENV_FILE_KEY: &str = "SERVICEBOOK_ENV_FILE";
const DEFAULT_ENV_FILE: &str = ".env";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let env_file = std::env::var(ENV_FILE_KEY).unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    let config = match AppConfig::load(&env_file) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, env_file = %env_file, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
        .with_data_dir(config.data_dir.clone())
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        data_dir = %config.data_dir.display(),
        "starting servicebook"
    );

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
