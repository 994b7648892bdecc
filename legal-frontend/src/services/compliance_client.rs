//! Compliance backend: checks each clause of a PDF against legal rules.
//!
//! Large documents take minutes to process, so this backend is usually
//! configured with a much longer timeout than the others.

use crate::config::BackendSettings;
use crate::models::ComplianceReport;
use crate::services::backend::{BackendClient, BackendError, PdfUpload};

pub struct ComplianceClient {
    backend: BackendClient,
}

impl ComplianceClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new("compliance", settings)?,
        })
    }

    pub async fn analyze_document(
        &self,
        upload: PdfUpload,
        request_id: Option<&str>,
    ) -> Result<ComplianceReport, BackendError> {
        self.backend.post_pdf("/upload", upload, request_id).await
    }
}
