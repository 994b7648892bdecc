use serde::Deserialize;
use service_core::config::{load_settings, TelemetryConfig};
use service_core::error::AppError;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub session: SessionSettings,
    pub backends: BackendsSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound for PDF uploads forwarded to the analysis backends.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}

#[derive(Deserialize, Clone, Debug)]
pub struct SessionSettings {
    #[serde(default = "default_inactivity_hours")]
    pub inactivity_hours: i64,
    /// Mark the session cookie `Secure`; enable when served over HTTPS.
    #[serde(default)]
    pub secure_cookie: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            inactivity_hours: default_inactivity_hours(),
            secure_cookie: false,
        }
    }
}

fn default_inactivity_hours() -> i64 {
    24
}

/// One entry per remote analysis service.
#[derive(Deserialize, Clone, Debug)]
pub struct BackendsSettings {
    pub risk: BackendSettings,
    pub compliance: BackendSettings,
    pub contract: BackendSettings,
    pub negotiation: BackendSettings,
    pub clauses: BackendSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BackendSettings {
    pub base_url: String,
    /// Applied to both connect and whole-request timeouts.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir()?;

    // Run either from the workspace root or from inside legal-frontend/
    let configuration_directory = if base_path.ends_with("legal-frontend") {
        base_path.join("config")
    } else {
        base_path.join("legal-frontend").join("config")
    };

    load_settings(&configuration_directory)
}
