use crate::handlers::screen::{self, NEGOTIATION_KEY};
use crate::models::negotiation::TurnRejected;
use crate::models::ChatState;
use crate::AppState;
use anyhow::anyhow;
use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use service_core::error::AppError;
use service_core::middleware::RequestId;
use tower_sessions::Session;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

pub async fn get_state(session: Session) -> Result<Json<ChatState>, AppError> {
    Ok(Json(screen::load(&session, NEGOTIATION_KEY).await?))
}

/// Send one turn for the party whose turn it is.
///
/// Backend failures are recorded on the chat state rather than returned as
/// HTTP errors; only rejected turns (blank, negotiation over) fail the request.
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    request_id: Option<Extension<RequestId>>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ChatState>, AppError> {
    let mut chat: ChatState = screen::load(&session, NEGOTIATION_KEY).await?;

    chat.check_can_send(&body.message).map_err(|rejected| match rejected {
        TurnRejected::BlankMessage => AppError::BadRequest(anyhow!(rejected)),
        TurnRejected::Completed => AppError::Conflict(anyhow!(rejected)),
    })?;

    let request = chat.next_request(&body.message);
    let backends = state.backends.clone();
    let request_id = screen::request_id(&request_id).map(str::to_string);

    // Finished on its own task: the backend counts the turn even if the client leaves
    let chat = screen::complete(&session, NEGOTIATION_KEY, async move {
        match backends
            .negotiation
            .send_turn(&request, request_id.as_deref())
            .await
        {
            Ok(response) => {
                chat.apply_success(body.message, response);
                tracing::info!(
                    negotiation_id = %chat.negotiation_id,
                    messages = chat.messages.len(),
                    remaining = chat.messages_remaining,
                    status = %chat.status,
                    "Negotiation turn recorded"
                );
            }
            Err(e) => chat.apply_failure(e.to_string()),
        }
        chat
    })
    .await?;

    Ok(Json(chat))
}

pub async fn clear_error(session: Session) -> Result<Json<ChatState>, AppError> {
    let mut chat: ChatState = screen::load(&session, NEGOTIATION_KEY).await?;
    chat.clear_error();
    screen::store(&session, NEGOTIATION_KEY, &chat).await?;
    Ok(Json(chat))
}

pub async fn reset(session: Session) -> Result<Json<ChatState>, AppError> {
    screen::clear(&session, NEGOTIATION_KEY).await?;
    Ok(Json(ChatState::default()))
}
