use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod routes;
mod signature;

use adapters::{ClubhouseClient, DiscordWebhook};
use application::RelayService;
use config::RelayConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    /// Secret for verifying `Clubhouse-Signature`, if configured
    pub webhook_secret: Option<String>,
}

impl AppState {
    /// Wire the HTTP adapters described by the configuration
    pub fn from_config(config: &RelayConfig) -> anyhow::Result<Self> {
        let lookup = ClubhouseClient::new(
            config.clubhouse_api_url.clone(),
            config.clubhouse_api_token.clone(),
            config.http_timeout,
        )
        .context("Failed to build Clubhouse client")?;
        let sink = DiscordWebhook::new(config.discord_webhook_url.clone(), config.http_timeout)
            .context("Failed to build Discord client")?;

        Ok(Self {
            relay: Arc::new(RelayService::new(Arc::new(lookup), Arc::new(sink))),
            webhook_secret: config.webhook_secret.clone(),
        })
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Clubhook is running - relaying Clubhouse events to Discord".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::webhook::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Clubhook initializing...");

    dotenvy::dotenv().ok();
    let config =
        RelayConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
            .context("Invalid configuration")?;

    tracing::info!(
        clubhouse_api_url = %config.clubhouse_api_url,
        timeout_secs = config.http_timeout.as_secs(),
        "Configuration loaded"
    );
    if config.webhook_secret.is_some() {
        tracing::info!("Webhook signature verification enabled");
    } else {
        tracing::warn!("No CLUBHOUSE_WEBHOOK_SECRET set - signed webhooks will be refused");
    }

    let state = AppState::from_config(&config)?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Clubhook ready");

    Ok(app(state).into())
}
