use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Contract templates offered by the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Nda,
    Contractor,
    Sla,
    Partnership,
    Sales,
    Employment,
    Lease,
    Mou,
    Noncompete,
}

/// The single type-specific field a contract type asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraField {
    pub name: &'static str,
    pub label: &'static str,
}

impl ContractType {
    pub const ALL: [ContractType; 9] = [
        ContractType::Nda,
        ContractType::Contractor,
        ContractType::Sla,
        ContractType::Partnership,
        ContractType::Sales,
        ContractType::Employment,
        ContractType::Lease,
        ContractType::Mou,
        ContractType::Noncompete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Nda => "nda",
            ContractType::Contractor => "contractor",
            ContractType::Sla => "sla",
            ContractType::Partnership => "partnership",
            ContractType::Sales => "sales",
            ContractType::Employment => "employment",
            ContractType::Lease => "lease",
            ContractType::Mou => "mou",
            ContractType::Noncompete => "noncompete",
        }
    }

    pub fn extra_field(&self) -> Option<ExtraField> {
        match self {
            ContractType::Lease => Some(ExtraField {
                name: "property_address",
                label: "Property Address",
            }),
            ContractType::Employment => Some(ExtraField {
                name: "position",
                label: "Position",
            }),
            ContractType::Sales => Some(ExtraField {
                name: "goods_description",
                label: "Goods Description",
            }),
            ContractType::Noncompete => Some(ExtraField {
                name: "scope",
                label: "Scope of Restriction",
            }),
            _ => None,
        }
    }
}

/// Entry of the `GET /contracts/types` listing.
#[derive(Debug, Clone, Serialize)]
pub struct ContractTypeInfo {
    pub contract_type: ContractType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_field: Option<ExtraField>,
}

impl From<ContractType> for ContractTypeInfo {
    fn from(contract_type: ContractType) -> Self {
        Self {
            contract_type,
            extra_field: contract_type.extra_field(),
        }
    }
}

/// Jurisdiction assumed when the form leaves it out or blank.
pub const DEFAULT_JURISDICTION: &str = "New Delhi";

fn default_jurisdiction() -> String {
    DEFAULT_JURISDICTION.to_string()
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// The contract screen's form as submitted by the user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContractForm {
    pub contract_type: ContractType,
    #[validate(custom(function = "not_blank"))]
    pub party_a: String,
    #[validate(custom(function = "not_blank"))]
    pub party_b: String,
    #[validate(custom(function = "not_blank"))]
    pub duration: String,
    #[validate(custom(function = "not_blank"))]
    pub clause_query: String,
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    #[serde(default)]
    pub property_address: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub goods_description: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractRequest {
    pub contract_type: ContractType,
    pub party_a: String,
    pub party_b: String,
    pub duration: String,
    pub clause_query: String,
    pub jurisdiction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<ContractForm> for ContractRequest {
    /// Keeps only the extra field that belongs to the chosen contract type.
    fn from(form: ContractForm) -> Self {
        let kind = form.contract_type;
        let only_for = |wanted: ContractType, value: Option<String>| {
            if kind == wanted {
                present(value)
            } else {
                None
            }
        };

        Self {
            contract_type: kind,
            party_a: form.party_a.trim().to_string(),
            party_b: form.party_b.trim().to_string(),
            duration: form.duration.trim().to_string(),
            clause_query: form.clause_query.trim().to_string(),
            jurisdiction: present(Some(form.jurisdiction))
                .unwrap_or_else(default_jurisdiction),
            property_address: only_for(ContractType::Lease, form.property_address),
            position: only_for(ContractType::Employment, form.position),
            goods_description: only_for(ContractType::Sales, form.goods_description),
            scope: only_for(ContractType::Noncompete, form.scope),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractResponse {
    pub message: String,
    pub contract: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}
