use crate::handlers::screen::{self, OCR_KEY};
use crate::models::{OcrState, ViewState};
use crate::AppState;
use anyhow::anyhow;
use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use service_core::error::AppError;
use service_core::middleware::RequestId;
use tower_sessions::Session;

#[derive(Debug, Deserialize)]
pub struct UpdateTextRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    /// Edited text to analyze; falls back to the stored recognized text.
    #[serde(default)]
    pub text: Option<String>,
}

pub async fn get_state(session: Session) -> Result<Json<OcrState>, AppError> {
    Ok(Json(screen::load(&session, OCR_KEY).await?))
}

/// Replace the recognized text, e.g. after a new scan or a manual edit.
pub async fn update_text(
    session: Session,
    Json(body): Json<UpdateTextRequest>,
) -> Result<Json<OcrState>, AppError> {
    let mut ocr: OcrState = screen::load(&session, OCR_KEY).await?;
    ocr.update_extracted_text(body.text);
    screen::store(&session, OCR_KEY, &ocr).await?;
    Ok(Json(ocr))
}

pub async fn analyze(
    State(state): State<AppState>,
    session: Session,
    request_id: Option<Extension<RequestId>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<OcrState>, AppError> {
    let mut ocr: OcrState = screen::load(&session, OCR_KEY).await?;
    if let Some(text) = body.text {
        ocr.extracted_text = text;
    }

    if ocr.extracted_text.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow!("No text to analyze")));
    }

    ocr.analysis = ViewState::Loading;
    screen::store_now(&session, OCR_KEY, &ocr).await?;

    let backends = state.backends.clone();
    let request_id = screen::request_id(&request_id).map(str::to_string);

    let ocr = screen::complete(&session, OCR_KEY, async move {
        let result = backends
            .clauses
            .analyze_text(&ocr.extracted_text, request_id.as_deref())
            .await;
        ocr.analysis = ViewState::from_result(result);
        ocr
    })
    .await?;

    Ok(Json(ocr))
}

pub async fn reset(session: Session) -> Result<Json<OcrState>, AppError> {
    screen::clear(&session, OCR_KEY).await?;
    Ok(Json(OcrState::default()))
}
