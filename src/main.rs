mod api_doc;
mod auth;
mod config;
mod descriptor;
mod error;
mod handlers;
mod i18n;
mod menu;
mod models;
mod operation;
mod pages;
mod registry;
mod routes;
mod state;

use anyhow::Context;
use axum::{routing::get, Router};
use config::Config;
use state::AppState;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::ROUTE_LIST, get(handlers::list_routes_handler))
        .route(routes::ROUTE_ITEM, get(handlers::get_route_handler))
        .route(routes::ROUTE_COMPONENT, get(handlers::component_handler))
        .route(routes::MENU, get(handlers::menu_handler))
        .with_state(state)
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, api_doc::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("nav-registry starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let known: Vec<&str> = state.nav.operations.iter().map(|op| op.as_str()).collect();
    tracing::info!("Known operations: {}", known.join(", "));
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
