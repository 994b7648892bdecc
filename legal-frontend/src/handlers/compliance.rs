use crate::handlers::screen::{self, COMPLIANCE_KEY};
use crate::models::{ComplianceSummary, ViewState};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    Extension, Json,
};
use service_core::error::AppError;
use service_core::middleware::RequestId;
use tower_sessions::Session;

type ComplianceState = ViewState<ComplianceSummary>;

pub async fn get_state(session: Session) -> Result<Json<ComplianceState>, AppError> {
    Ok(Json(screen::load(&session, COMPLIANCE_KEY).await?))
}

pub async fn analyze(
    State(state): State<AppState>,
    session: Session,
    request_id: Option<Extension<RequestId>>,
    multipart: Multipart,
) -> Result<Json<ComplianceState>, AppError> {
    let upload = screen::read_pdf(multipart).await?;
    tracing::info!(size = upload.bytes.len(), "Starting compliance analysis");

    screen::store_now(&session, COMPLIANCE_KEY, &ComplianceState::Loading).await?;

    let backends = state.backends.clone();
    let request_id = screen::request_id(&request_id).map(str::to_string);

    let view = screen::complete(&session, COMPLIANCE_KEY, async move {
        let result = backends
            .compliance
            .analyze_document(upload, request_id.as_deref())
            .await
            .map(ComplianceSummary::from);

        if let Ok(summary) = &result {
            tracing::info!(
                issues = summary.total,
                violations = summary.violations,
                "Compliance analysis complete"
            );
        }
        ComplianceState::from_result(result)
    })
    .await?;

    Ok(Json(view))
}

pub async fn reset(session: Session) -> Result<Json<ComplianceState>, AppError> {
    screen::clear(&session, COMPLIANCE_KEY).await?;
    Ok(Json(ComplianceState::Idle))
}
