use std::sync::Arc;

use crate::chat::service::ChatService;
use crate::contact::relay::ContactRelay;
use crate::models::profile::FactBase;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only for the lifetime of the process.
    pub facts: Arc<FactBase>,
    pub chat: ChatService,
    pub contact_relay: ContactRelay,
}
