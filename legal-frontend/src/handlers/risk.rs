use crate::handlers::screen::{self, RISK_KEY};
use crate::models::{AnalysisResponse, ViewState};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    Extension, Json,
};
use service_core::error::AppError;
use service_core::middleware::RequestId;
use tower_sessions::Session;

type RiskState = ViewState<AnalysisResponse>;

pub async fn get_state(session: Session) -> Result<Json<RiskState>, AppError> {
    Ok(Json(screen::load(&session, RISK_KEY).await?))
}

pub async fn analyze(
    State(state): State<AppState>,
    session: Session,
    request_id: Option<Extension<RequestId>>,
    multipart: Multipart,
) -> Result<Json<RiskState>, AppError> {
    let upload = screen::read_pdf(multipart).await?;

    screen::store_now(&session, RISK_KEY, &RiskState::Loading).await?;

    let backends = state.backends.clone();
    let request_id = screen::request_id(&request_id).map(str::to_string);

    let view = screen::complete(&session, RISK_KEY, async move {
        let result = backends
            .risk
            .analyze_document(upload, request_id.as_deref())
            .await;

        if let Ok(report) = &result {
            tracing::info!(
                good = report.good_clauses.len(),
                risks = report.risk_clauses.len(),
                recommendations = report.recommendations.len(),
                "Risk analysis complete"
            );
        }
        RiskState::from_result(result)
    })
    .await?;

    Ok(Json(view))
}

pub async fn reset(session: Session) -> Result<Json<RiskState>, AppError> {
    screen::clear(&session, RISK_KEY).await?;
    Ok(Json(RiskState::Idle))
}
