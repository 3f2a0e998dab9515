use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::contact::validation::ContactForm;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/v1/contact
///
/// Validates the form locally, then relays it once. Validation failures never
/// reach the relay.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = form.validate()?;
    info!("Relaying contact message from {}", submission.email);

    let message = state.contact_relay.send(&submission).await?;
    Ok(Json(ContactResponse { message }))
}
