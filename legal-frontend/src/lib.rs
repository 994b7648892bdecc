pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use config::BackendsSettings;
use services::{BackendError, Backends};
use std::sync::Arc;

/// Shared application state containing the backend clients
#[derive(Clone)]
pub struct AppState {
    pub backends: Arc<Backends>,
}

impl AppState {
    pub fn new(backends: Arc<Backends>) -> Self {
        Self { backends }
    }

    pub fn from_settings(settings: &BackendsSettings) -> Result<Self, BackendError> {
        Ok(Self::new(Arc::new(Backends::from_settings(settings)?)))
    }
}
