//! Shared HTTP plumbing for the remote analysis services.
//!
//! Every backend is a plain JSON-over-HTTP service; this module owns the
//! reqwest client, timeouts, trace propagation and the mapping of transport
//! and protocol failures onto [`BackendError`].

use crate::config::BackendSettings;
use metrics::{counter, histogram};
use reqwest::{multipart, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use service_core::observability::TracedClientExt;
use std::time::Instant;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DEFAULT_PDF_NAME: &str = "document.pdf";

/// Failure of a single backend round trip, rendered as the message the
/// screen shows to the user.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request to {service} timed out")]
    Timeout { service: &'static str },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {} - {}", .status.as_u16(), .status.canonical_reason().unwrap_or("Unknown"))]
    Status { status: StatusCode, body: String },

    #[error("Empty response from server")]
    EmptyBody,

    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl BackendError {
    /// HTTP status returned by the backend, when it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            BackendError::Timeout { .. } => "timeout",
            BackendError::Transport(_) => "transport",
            BackendError::Status { .. } => "status",
            BackendError::EmptyBody => "empty",
            BackendError::Decode(_) => "decode",
        }
    }
}

/// A PDF picked by the user, forwarded as the multipart `file` part.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    pub fn new(file_name: Option<&str>, bytes: Vec<u8>) -> Self {
        let file_name = file_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_PDF_NAME)
            .to_string();
        Self { file_name, bytes }
    }

    fn into_form(self) -> Result<multipart::Form, BackendError> {
        let part = multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(PDF_MIME)?;
        Ok(multipart::Form::new().part("file", part))
    }
}

/// reqwest client bound to one backend's base URL and timeout.
#[derive(Debug, Clone)]
pub struct BackendClient {
    service: &'static str,
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(service: &'static str, settings: &BackendSettings) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(settings.timeout())
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            service,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        request_id: Option<&str>,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let started = Instant::now();

        let result = self
            .client
            .traced_post(&url)
            .request_id(request_id)
            .json(body)
            .send()
            .await;

        self.finish(&url, started, result).await
    }

    pub async fn post_pdf<T>(
        &self,
        path: &str,
        upload: PdfUpload,
        request_id: Option<&str>,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let started = Instant::now();

        tracing::info!(
            service = self.service,
            url = %url,
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "Uploading PDF to backend"
        );

        let form = upload.into_form()?;
        let result = self
            .client
            .traced_post(&url)
            .request_id(request_id)
            .multipart(form)
            .send()
            .await;

        self.finish(&url, started, result).await
    }

    async fn finish<T>(
        &self,
        url: &str,
        started: Instant,
        result: Result<Response, reqwest::Error>,
    ) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let outcome = self.decode(result).await;
        let elapsed = started.elapsed();

        histogram!("backend_request_duration_seconds", "service" => self.service)
            .record(elapsed.as_secs_f64());

        match &outcome {
            Ok(_) => {
                counter!("backend_requests_total", "service" => self.service, "outcome" => "success")
                    .increment(1);
                tracing::info!(
                    service = self.service,
                    url = %url,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Backend call succeeded"
                );
            }
            Err(e) => {
                counter!("backend_requests_total", "service" => self.service, "outcome" => e.outcome())
                    .increment(1);
                tracing::warn!(
                    service = self.service,
                    url = %url,
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "Backend call failed"
                );
            }
        }

        outcome
    }

    async fn decode<T>(&self, result: Result<Response, reqwest::Error>) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
    {
        let response = result.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            tracing::debug!(service = self.service, status = %status, body = %body, "Backend error body");
            return Err(BackendError::Status { status, body });
        }

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(BackendError::EmptyBody);
        }

        serde_json::from_str(trimmed).map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn transport_error(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                service: self.service,
            }
        } else {
            BackendError::Transport(err)
        }
    }
}
