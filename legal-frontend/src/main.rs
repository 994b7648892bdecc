use anyhow::Context;
use legal_frontend::config::{get_configuration, Settings};
use legal_frontend::services::metrics::init_metrics;
use legal_frontend::startup::build_router;
use legal_frontend::AppState;
use service_core::observability::init_tracing;
use tracing::info;

fn log_backends(settings: &Settings) {
    let backends = &settings.backends;
    for (service, backend) in [
        ("risk", &backends.risk),
        ("compliance", &backends.compliance),
        ("contract", &backends.contract),
        ("negotiation", &backends.negotiation),
        ("clauses", &backends.clauses),
    ] {
        info!(
            service,
            base_url = %backend.base_url,
            timeout_secs = backend.timeout_secs,
            "Backend configured"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Tracing is not up yet, so configuration errors go to stderr
    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("legal-frontend", &configuration.telemetry)?;
    init_metrics()?;
    log_backends(&configuration);

    let state = AppState::from_settings(&configuration.backends)
        .context("Failed to build backend clients")?;
    let app = build_router(state, &configuration);

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to address {}", address))?;

    info!(%address, "Starting legal-frontend");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
