use std::sync::Arc;

use axum::{Router, routing::get};
use color_eyre::eyre::{Context, eyre};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    database::Database,
    http_server::{http_routes::reports, state::AppState},
    services::reports::ReportService,
};

pub struct HttpServerConfig {
    pub port: u16,
    pub database: Database,
    pub config: Config,
}

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(reports::index))
        .route("/singer", get(reports::singer_page))
        .route(
            "/genre",
            get(reports::genre_page).post(reports::genre_form),
        )
        .route("/song", get(reports::song_page))
        .route("/awards", axum::routing::post(reports::award_form))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

pub async fn start(server_config: HttpServerConfig) -> color_eyre::Result<()> {
    let HttpServerConfig {
        port,
        database,
        config,
    } = server_config;

    let app_state = Arc::new(AppState {
        reports: ReportService::new(Arc::new(database), &config.report),
    });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    log::info!("Listening on 0.0.0.0:{}", port);

    axum::serve(listener, router(app_state))
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
