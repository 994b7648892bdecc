use serde::{Deserialize, Serialize};

/// Risk backend verdict for one uploaded contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub good_clauses: Vec<GoodClause>,
    #[serde(default)]
    pub risk_clauses: Vec<RiskClause>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodClause {
    pub clause: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskClause {
    pub clause: String,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub clause: String,
    pub reason: String,
    pub suggested_rewrite: String,
}

impl AnalysisResponse {
    pub fn has_risks(&self) -> bool {
        !self.risk_clauses.is_empty()
    }
}
