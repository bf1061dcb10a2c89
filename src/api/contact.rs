//! Contact inquiry API endpoint.

use axum::{extract::State, Json};

use super::{created, ApiResult, MessageBody};
use crate::models::CreateContactRequest;
use crate::AppState;

/// POST /api/contact - Submit a contact inquiry.
///
/// The inquiry is persisted first, then the notification goes out through
/// the mail relay. A relay failure after the row is written still maps to
/// a generic 500, so the caller cannot tell the record was saved; the two
/// causes are only distinguished in the logs.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> ApiResult<MessageBody> {
    let new_contact = request.validate()?;

    let inquiry = state.repo.create_contact(&new_contact).await?;
    tracing::info!("Inquiry received from {} ({})", inquiry.name, inquiry.id);

    state.mailer.send_inquiry_notification(&inquiry).await?;

    created(MessageBody::new("Contact saved successfully"))
}
