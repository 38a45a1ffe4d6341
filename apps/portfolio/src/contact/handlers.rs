//! Axum route handlers for the Contact API.

use axum::{extract::State, Json};

use crate::contact::sink::ContactReceipt;
use crate::contact::validation::{validate, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Validates the form and hands it to the configured sink.
/// Validation failures return 400 with the message to show inline.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactReceipt>, AppError> {
    let contact = validate(&form)?;
    let receipt = state.contact_sink.submit(contact).await?;
    Ok(Json(receipt))
}
