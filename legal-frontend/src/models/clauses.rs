use crate::models::view_state::ViewState;
use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-clauses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseAnalysisRequest {
    pub legal_text: String,
}

/// Clause backend verdict. The backend spells its keys `good_clausess` and
/// `bad_clausess`; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseClassification {
    #[serde(alias = "good_clausess", default)]
    pub good_clauses: Vec<String>,
    #[serde(alias = "bad_clausess", default)]
    pub bad_clauses: Vec<String>,
}

/// OCR screen state: the editable recognized text plus the last analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrState {
    pub extracted_text: String,
    #[serde(flatten)]
    pub analysis: ViewState<ClauseClassification>,
}

impl OcrState {
    /// Replace the recognized text; any in-flight marker is dropped.
    pub fn update_extracted_text(&mut self, text: impl Into<String>) {
        self.extracted_text = text.into();
        if self.analysis.is_loading() {
            self.analysis = ViewState::Idle;
        }
    }
}
