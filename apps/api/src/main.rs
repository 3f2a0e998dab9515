mod chat;
mod config;
mod contact;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::history::ConversationStore;
use crate::chat::service::ChatService;
use crate::config::Config;
use crate::contact::relay::ContactRelay;
use crate::llm_client::{CompletionBackend, CompletionClient};
use crate::models::profile::FactBase;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let facts = Arc::new(match &config.fact_base_path {
        Some(path) => FactBase::from_path(path)?,
        None => FactBase::embedded()?,
    });
    info!(
        "Fact base loaded for {} ({} projects)",
        facts.personal_info.name,
        facts.projects.len()
    );

    let completion: Option<Arc<dyn CompletionBackend>> = match &config.completion_api_key {
        Some(key) => {
            let client = CompletionClient::new(
                key.clone(),
                config.completion_api_url.clone(),
                config.completion_model.clone(),
            )?;
            info!("Completion client initialized (model: {})", client.model());
            Some(Arc::new(client) as Arc<dyn CompletionBackend>)
        }
        None => {
            info!("No completion API key configured; chat answers from the local responder only");
            None
        }
    };

    let chat = ChatService::new(
        facts.clone(),
        completion,
        ConversationStore::new(config.history_window),
    );

    let contact_relay = ContactRelay::new(config.contact_relay_url.clone())?;
    match contact_relay.endpoint() {
        Some(url) => info!("Contact relay: {url}"),
        None => warn!("CONTACT_RELAY_URL not set; contact submissions will be refused"),
    }

    let state = AppState {
        facts,
        chat,
        contact_relay,
    };

    // The static site is served from a different origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
