//! Helpers shared by the screen handlers: per-session view state, request
//! correlation and PDF multipart extraction.

use crate::services::PdfUpload;
use anyhow::anyhow;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use axum::Extension;
use serde::{de::DeserializeOwned, Serialize};
use service_core::error::AppError;
use std::future::Future;
use service_core::middleware::RequestId;
use tower_sessions::Session;

pub const RISK_KEY: &str = "screen.risk";
pub const COMPLIANCE_KEY: &str = "screen.compliance";
pub const CONTRACT_KEY: &str = "screen.contract";
pub const NEGOTIATION_KEY: &str = "screen.negotiation";
pub const OCR_KEY: &str = "screen.ocr";

fn session_error(e: impl std::fmt::Display) -> AppError {
    AppError::SessionError(e.to_string())
}

/// Current state stored under `key`, or the screen's initial state.
pub async fn load<T>(session: &Session, key: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let value: Option<T> = session.get(key).await.map_err(session_error)?;
    Ok(value.unwrap_or_default())
}

pub async fn store<T: Serialize>(session: &Session, key: &str, value: &T) -> Result<(), AppError> {
    session.insert(key, value).await.map_err(session_error)
}

/// Store and flush immediately so concurrent requests of the same session
/// observe the value while this request is still running.
pub async fn store_now<T: Serialize>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    store(session, key, value).await?;
    session.save().await.map_err(session_error)
}

/// Run a screen's backend work on its own task and persist the outcome there.
///
/// The task outlives the handler, so a client that disconnects mid-request
/// still leaves the screen in its final state instead of `loading`.
pub async fn complete<T, F>(session: &Session, key: &'static str, work: F) -> Result<T, AppError>
where
    T: Serialize + Send + Sync + 'static,
    F: Future<Output = T> + Send + 'static,
{
    let session = session.clone();
    tokio::spawn(async move {
        let outcome = work.await;
        store_now(&session, key, &outcome).await?;
        Ok::<_, AppError>(outcome)
    })
    .await
    .map_err(|e| AppError::InternalError(anyhow!("Screen task failed: {}", e)))?
}

pub async fn clear(session: &Session, key: &str) -> Result<(), AppError> {
    session
        .remove::<serde_json::Value>(key)
        .await
        .map_err(session_error)?;
    Ok(())
}

pub fn request_id(ext: &Option<Extension<RequestId>>) -> Option<&str> {
    ext.as_ref().map(|Extension(id)| id.0.as_str())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(anyhow!("Invalid multipart body: {}", e.body_text()))
    }
}

fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let named_pdf = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case(crate::services::backend::PDF_MIME) => true,
        Some(ct) if ct.eq_ignore_ascii_case("application/octet-stream") => named_pdf,
        Some(_) => false,
        None => named_pdf,
    }
}

/// Pull the `file` part out of an upload form.
pub async fn read_pdf(mut multipart: Multipart) -> Result<PdfUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        if !is_pdf(content_type.as_deref(), file_name.as_deref()) {
            return Err(AppError::UnsupportedMediaType(format!(
                "Expected a PDF document, got {}",
                content_type.as_deref().unwrap_or("unknown content type")
            )));
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest(anyhow!("Failed to read PDF file")));
        }

        tracing::debug!(
            file_name = file_name.as_deref().unwrap_or("-"),
            size = bytes.len(),
            "Received PDF upload"
        );
        return Ok(PdfUpload::new(file_name.as_deref(), bytes.to_vec()));
    }

    Err(AppError::BadRequest(anyhow!("Missing 'file' part")))
}
