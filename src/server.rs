mod api_response;
mod app_state;
mod handlers;
mod status;

pub use self::{api_response::ApiResponse, app_state::AppState};

use crate::{api::Api, config::Config, database::Database};
use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use sqlx::PgPool;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let db_config = &config.db;
    let credentials = if let Some(ref password) = db_config.password {
        format!("{}:{password}", db_config.username)
    } else {
        db_config.username.clone()
    };
    let pool = PgPool::connect(&format!(
        "postgres://{credentials}@{}:{}/{}",
        db_config.host, db_config.port, db_config.name
    ))
    .await
    .with_context(|| "Cannot connect to the primary database")?;

    let http_server_url = format!("0.0.0.0:{}", config.http_port);
    let database = Database::create(pool).await?;

    let state = web::Data::new(AppState::new(Api::new(config, database)));
    let cors_origin = state.config.public_url.origin().ascii_serialization();
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compat::new(middleware::Compress::default()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allow_any_header()
                    .allow_any_method(),
            )
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/status", web::get().to(handlers::status_get))
                    .route(
                        "/scheduleWorkflow",
                        web::post().to(handlers::workflows_schedule),
                    )
                    .route(
                        "/scheduledWorkflows",
                        web::get().to(handlers::workflows_list),
                    )
                    .route(
                        "/scheduledWorkflow/{workflow_id}",
                        web::get().to(handlers::workflows_get),
                    )
                    .route(
                        "/cancelScheduledWorkflow",
                        web::delete().to(handlers::workflows_cancel),
                    ),
            )
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Flowsched API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .with_context(|| "Failed to run Flowsched API server.")
}
