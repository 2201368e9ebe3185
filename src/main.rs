use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::api::page::index_handler;
use crate::api::plan::{AppState, generate_plan_handler};
use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::services::plan_generation::PlanGenerationService;

mod api;
mod clients;
mod config;
mod models;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let gemini_client = GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    )?;
    let plan_service = PlanGenerationService::new(gemini_client);

    let state = AppState {
        plan_service,
        plan_cache: Arc::new(Mutex::new(HashMap::new())),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/plan", post(generate_plan_handler))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
