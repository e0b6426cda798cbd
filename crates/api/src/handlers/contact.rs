//! Handlers for the `/contact` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::message::{CreateMessage, Message, MessageReceipt, MessageStats};

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, JsonBody};
use crate::handlers::health::ServiceHealth;
use crate::query::MessageListParams;
use crate::response::Envelope;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Message",
        id,
    })
}

// ---------------------------------------------------------------------------
// POST /contact/send
// ---------------------------------------------------------------------------

/// Store a contact form submission and return a short receipt.
pub async fn send(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMessage>,
) -> AppResult<(StatusCode, Json<Envelope<MessageReceipt>>)> {
    let msg = state.messages.create(input).await?;

    tracing::info!(message_id = msg.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(MessageReceipt::from(&msg)).with_message("Mensaje enviado exitosamente")),
    ))
}

// ---------------------------------------------------------------------------
// GET /contact/messages
// ---------------------------------------------------------------------------

/// List messages, optionally filtered by read state (`?read=true|false`).
///
/// `total` and `unread` always describe the whole inbox.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> Json<Envelope<Vec<Message>>> {
    let listing = state.messages.list(params.read_filter()).await;
    let count = listing.items.len();
    Json(
        Envelope::data(listing.items)
            .with_count(count)
            .with_total(listing.total)
            .with_unread(listing.unread),
    )
}

// ---------------------------------------------------------------------------
// GET /contact/messages/{id}
// ---------------------------------------------------------------------------

/// Fetch one message. Viewing it marks it as read.
pub async fn get_message(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Envelope<Message>>> {
    let msg = state
        .messages
        .find_and_mark_read(id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(Envelope::data(msg)))
}

// ---------------------------------------------------------------------------
// PUT /contact/messages/{id}/read
// ---------------------------------------------------------------------------

pub async fn mark_read(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Envelope<Message>>> {
    let msg = state
        .messages
        .mark_read(id)
        .await
        .ok_or_else(|| not_found(id))?;
    Ok(Json(
        Envelope::data(msg).with_message("Mensaje marcado como leído"),
    ))
}

// ---------------------------------------------------------------------------
// DELETE /contact/messages/{id}
// ---------------------------------------------------------------------------

pub async fn delete_message(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Envelope>> {
    if !state.messages.delete(id).await {
        return Err(not_found(id));
    }

    tracing::info!(message_id = id, "Contact message deleted");

    Ok(Json(Envelope::message(format!(
        "Mensaje {id} eliminado exitosamente"
    ))))
}

// ---------------------------------------------------------------------------
// GET /contact/stats, /contact/health
// ---------------------------------------------------------------------------

pub async fn stats(State(state): State<AppState>) -> Json<Envelope<MessageStats>> {
    Json(Envelope::stats(state.messages.stats().await))
}

pub async fn health(State(state): State<AppState>) -> Json<ServiceHealth> {
    Json(ServiceHealth {
        messages: Some(state.messages.count().await),
        ..ServiceHealth::healthy("contact-api")
    })
}
