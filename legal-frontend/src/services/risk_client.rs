//! Risk detection backend: classifies clauses of an uploaded contract PDF.

use crate::config::BackendSettings;
use crate::models::AnalysisResponse;
use crate::services::backend::{BackendClient, BackendError, PdfUpload};

pub struct RiskClient {
    backend: BackendClient,
}

impl RiskClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new("risk", settings)?,
        })
    }

    pub async fn analyze_document(
        &self,
        upload: PdfUpload,
        request_id: Option<&str>,
    ) -> Result<AnalysisResponse, BackendError> {
        self.backend.post_pdf("/upload", upload, request_id).await
    }
}
