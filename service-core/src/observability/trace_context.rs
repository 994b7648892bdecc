//! Headers propagated on every outbound backend call: W3C trace context
//! (<https://www.w3.org/TR/trace-context/>) and the inbound request ID.

use opentelemetry::trace::TraceContextExt;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub const TRACEPARENT_HEADER: &str = "traceparent";
pub const TRACESTATE_HEADER: &str = "tracestate";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation values captured at send time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PropagationHeaders {
    pub traceparent: Option<String>,
    pub tracestate: Option<String>,
    pub request_id: Option<String>,
}

impl PropagationHeaders {
    /// Snapshot the active span's context. Trace fields stay empty unless an
    /// OpenTelemetry layer is installed and the span is valid.
    pub fn capture(request_id: Option<&str>) -> Self {
        let mut headers = Self {
            request_id: request_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            ..Self::default()
        };

        let context = Span::current().context();
        let span = context.span();
        let span_context = span.span_context();
        if !span_context.is_valid() {
            return headers;
        }

        // version-trace_id-span_id-trace_flags
        headers.traceparent = Some(format!(
            "00-{}-{}-{:02x}",
            span_context.trace_id(),
            span_context.span_id(),
            span_context.trace_flags().to_u8()
        ));
        let state = span_context.trace_state().header();
        headers.tracestate = (!state.is_empty()).then_some(state);

        headers
    }

    /// Values that are not valid header text are dropped.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        let pairs = [
            (TRACEPARENT_HEADER, &self.traceparent),
            (TRACESTATE_HEADER, &self.tracestate),
            (REQUEST_ID_HEADER, &self.request_id),
        ];

        for (name, value) in pairs {
            if let Some(value) = value.as_deref()
                && let Ok(value) = HeaderValue::from_str(value)
            {
                map.insert(name, value);
            }
        }
        map
    }
}

/// reqwest request builder that attaches [`PropagationHeaders`] when sent.
pub struct TracedRequest {
    request: reqwest::RequestBuilder,
    request_id: Option<String>,
}

impl TracedRequest {
    pub fn new(request: reqwest::RequestBuilder) -> Self {
        Self {
            request,
            request_id: None,
        }
    }

    pub fn request_id(mut self, request_id: Option<&str>) -> Self {
        self.request_id = request_id.map(str::to_string);
        self
    }

    pub fn json<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.request = self.request.json(body);
        self
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.request = self.request.multipart(form);
        self
    }

    pub async fn send(self) -> Result<reqwest::Response, reqwest::Error> {
        let headers = PropagationHeaders::capture(self.request_id.as_deref()).to_header_map();
        self.request.headers(headers).send().await
    }
}

pub trait TracedClientExt {
    fn traced_post(&self, url: &str) -> TracedRequest;
}

impl TracedClientExt for reqwest::Client {
    fn traced_post(&self, url: &str) -> TracedRequest {
        TracedRequest::new(self.post(url))
    }
}
