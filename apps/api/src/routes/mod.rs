pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::contact::handlers as contact;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", get(chat::handle_profile))
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/contact", post(contact::handle_contact))
        .with_state(state)
}
