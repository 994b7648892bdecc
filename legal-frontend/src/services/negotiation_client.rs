use crate::config::BackendSettings;
use crate::models::{NegotiationRequest, NegotiationResponse};
use crate::services::backend::{BackendClient, BackendError};

/// Negotiation chat backend. Conversation state lives server-side and is
/// addressed by the negotiation ID echoed on every turn.
pub struct NegotiationClient {
    backend: BackendClient,
}

impl NegotiationClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new("negotiation", settings)?,
        })
    }

    pub async fn send_turn(
        &self,
        request: &NegotiationRequest,
        request_id: Option<&str>,
    ) -> Result<NegotiationResponse, BackendError> {
        tracing::debug!(
            negotiation_id = %request.negotiation_id,
            speaker = request.speaker.as_str(),
            "Sending negotiation turn"
        );
        self.backend.post_json("/negotiate", request, request_id).await
    }
}
