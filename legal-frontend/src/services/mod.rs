pub mod backend;
pub mod clause_client;
pub mod compliance_client;
pub mod contract_client;
pub mod metrics;
pub mod negotiation_client;
pub mod risk_client;

pub use backend::{BackendClient, BackendError, PdfUpload};
pub use clause_client::ClauseClient;
pub use compliance_client::ComplianceClient;
pub use contract_client::ContractClient;
pub use negotiation_client::NegotiationClient;
pub use risk_client::RiskClient;

use crate::config::BackendsSettings;

/// One client per remote analysis service.
pub struct Backends {
    pub risk: RiskClient,
    pub compliance: ComplianceClient,
    pub contract: ContractClient,
    pub negotiation: NegotiationClient,
    pub clauses: ClauseClient,
}

impl Backends {
    pub fn from_settings(settings: &BackendsSettings) -> Result<Self, BackendError> {
        Ok(Self {
            risk: RiskClient::new(&settings.risk)?,
            compliance: ComplianceClient::new(&settings.compliance)?,
            contract: ContractClient::new(&settings.contract)?,
            negotiation: NegotiationClient::new(&settings.negotiation)?,
            clauses: ClauseClient::new(&settings.clauses)?,
        })
    }
}
