use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// A screen advertised on the home page.
#[derive(Debug, Serialize)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

pub const FEATURES: [Feature; 5] = [
    Feature {
        id: "risk_detection",
        title: "AI-Powered Risk Detection",
        description: "Identify potential legal risks instantly",
        route: "/risk",
    },
    Feature {
        id: "compliance_intelligence",
        title: "Compliance Intelligence",
        description: "Stay compliant with updated legal rules",
        route: "/compliance",
    },
    Feature {
        id: "contract_generation",
        title: "Instant Contract Generation",
        description: "Generate contracts instantly",
        route: "/contracts",
    },
    Feature {
        id: "legal_chat",
        title: "Legal Conversation",
        description: "Analyze your legal conversation",
        route: "/negotiation",
    },
    Feature {
        id: "scan_document",
        title: "Document OCR",
        description: "Scan your documents and check for good/bad clauses",
        route: "/ocr",
    },
];

#[derive(Serialize)]
pub struct HomeResponse {
    pub app: &'static str,
    pub features: &'static [Feature],
}

pub async fn index() -> impl IntoResponse {
    Json(HomeResponse {
        app: "LegalGPT",
        features: &FEATURES,
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn not_found(uri: axum::http::Uri) -> service_core::error::AppError {
    service_core::error::AppError::NotFound(anyhow::anyhow!("No screen at {}", uri.path()))
}
