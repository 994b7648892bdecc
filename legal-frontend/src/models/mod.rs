pub mod clauses;
pub mod compliance;
pub mod contract;
pub mod negotiation;
pub mod risk;
pub mod view_state;

pub use clauses::{ClauseAnalysisRequest, ClauseClassification, OcrState};
pub use compliance::{ComplianceIssue, ComplianceReport, ComplianceSummary};
pub use contract::{ContractForm, ContractRequest, ContractResponse, ContractType, ContractTypeInfo};
pub use negotiation::{ChatMessage, ChatState, NegotiationRequest, NegotiationResponse, Speaker, Verdict};
pub use risk::{AnalysisResponse, GoodClause, Recommendation, RiskClause};
pub use view_state::ViewState;
