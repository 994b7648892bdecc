use crate::config::BackendSettings;
use crate::models::{ContractRequest, ContractResponse};
use crate::services::backend::{BackendClient, BackendError};

/// Contract generation backend.
pub struct ContractClient {
    backend: BackendClient,
}

impl ContractClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, BackendError> {
        Ok(Self {
            backend: BackendClient::new("contract", settings)?,
        })
    }

    pub async fn generate(
        &self,
        request: &ContractRequest,
        request_id: Option<&str>,
    ) -> Result<ContractResponse, BackendError> {
        tracing::info!(
            contract_type = request.contract_type.as_str(),
            jurisdiction = %request.jurisdiction,
            "Requesting contract generation"
        );
        self.backend.post_json("/generate", request, request_id).await
    }
}
