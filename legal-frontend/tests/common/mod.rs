#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use legal_frontend::config::{BackendSettings, BackendsSettings, ServerSettings, SessionSettings, Settings};
use legal_frontend::startup::build_router;
use legal_frontend::AppState;
use serde_json::Value;
use service_core::config::TelemetryConfig;
use tower::util::ServiceExt;
use wiremock::MockServer;

pub const BOUNDARY: &str = "legalgpt-test-boundary";
pub const SAMPLE_PDF: &[u8] = b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n";

/// Router under test with every backend pointed at one mock server.
///
/// Each backend gets its own path prefix on the mock server, e.g. the risk
/// backend's `/upload` is served at `/risk/upload`.
pub struct TestApp {
    pub router: Router,
    pub backend: MockServer,
    cookie: Option<String>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

pub fn test_settings(base_url: &str) -> Settings {
    let backend = |prefix: &str| BackendSettings::new(format!("{}/{}", base_url, prefix), 5);

    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_upload_bytes: 1024 * 1024,
        },
        telemetry: TelemetryConfig::default(),
        session: SessionSettings::default(),
        backends: BackendsSettings {
            risk: backend("risk"),
            compliance: backend("compliance"),
            contract: backend("contract"),
            negotiation: backend("negotiation"),
            clauses: backend("clauses"),
        },
    }
}

/// A second handle on the same session, for requests issued while another
/// request of that session is still in flight.
#[derive(Clone)]
pub struct SessionPoller {
    router: Router,
    cookie: Option<String>,
}

impl SessionPoller {
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send_request(&self.router, self.cookie.as_deref(), request)
            .await
            .0
    }
}

async fn send_request(
    router: &Router,
    cookie: Option<&str>,
    mut request: Request<Body>,
) -> (TestResponse, Option<String>) {
    if let Some(cookie) = cookie {
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
    }

    let response = router.clone().oneshot(request).await.unwrap();

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().to_string());

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));

    (
        TestResponse {
            status,
            headers,
            body,
        },
        set_cookie,
    )
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with settings adjusted by `configure`, e.g. shorter backend timeouts.
    pub async fn spawn_with(configure: impl FnOnce(&mut Settings)) -> Self {
        let backend = MockServer::start().await;
        let mut settings = test_settings(&backend.uri());
        configure(&mut settings);
        let state =
            AppState::from_settings(&settings.backends).expect("Failed to build backend clients");

        TestApp {
            router: build_router(state, &settings),
            backend,
            cookie: None,
        }
    }

    /// Send a request, carrying the session cookie across calls like a browser.
    pub async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let (response, set_cookie) =
            send_request(&self.router, self.cookie.as_deref(), request).await;
        if set_cookie.is_some() {
            self.cookie = set_cookie;
        }
        response
    }

    /// Establish a session cookie without touching the screen under test.
    pub async fn start_session(&mut self) {
        self.put_json("/ocr/text", serde_json::json!({"text": "session"}))
            .await;
        assert!(self.cookie.is_some(), "no session cookie issued");
    }

    pub fn poller(&self) -> SessionPoller {
        SessionPoller {
            router: self.router.clone(),
            cookie: self.cookie.clone(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&mut self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&mut self, uri: &str, body: Value) -> TestResponse {
        self.send_json("POST", uri, body).await
    }

    pub async fn put_json(&mut self, uri: &str, body: Value) -> TestResponse {
        self.send_json("PUT", uri, body).await
    }

    async fn send_json(&mut self, method: &str, uri: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn upload(
        &mut self,
        uri: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body("file", file_name, content_type, bytes)))
                .unwrap(),
        )
        .await
    }

    pub async fn upload_pdf(&mut self, uri: &str, file_name: &str) -> TestResponse {
        self.upload(uri, file_name, "application/pdf", SAMPLE_PDF)
            .await
    }
}

pub fn multipart_body(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}
