use crate::config::BackendSettings;
use crate::models::{ClauseAnalysisRequest, ClauseClassification};
use crate::services::backend::{BackendClient, BackendError};

/// Clause classification backend used by the OCR screen.
pub struct ClauseClient {
    backend: BackendClient,
}

impl ClauseClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new("clauses", settings)?,
        })
    }

    pub async fn analyze_text(
        &self,
        legal_text: &str,
        request_id: Option<&str>,
    ) -> Result<ClauseClassification, BackendError> {
        let request = ClauseAnalysisRequest {
            legal_text: legal_text.to_string(),
        };
        self.backend
            .post_json("/analyze-clauses", &request, request_id)
            .await
    }
}
