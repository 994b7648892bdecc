use crate::handlers::screen::{self, CONTRACT_KEY};
use crate::models::{ContractForm, ContractRequest, ContractResponse, ContractType, ContractTypeInfo, ViewState};
use crate::AppState;
use axum::{extract::State, Extension, Json};
use service_core::error::AppError;
use service_core::middleware::RequestId;
use tower_sessions::Session;
use validator::Validate;

type ContractState = ViewState<ContractResponse>;

pub async fn list_types() -> Json<Vec<ContractTypeInfo>> {
    Json(ContractType::ALL.into_iter().map(ContractTypeInfo::from).collect())
}

pub async fn get_state(session: Session) -> Result<Json<ContractState>, AppError> {
    Ok(Json(screen::load(&session, CONTRACT_KEY).await?))
}

pub async fn generate(
    State(state): State<AppState>,
    session: Session,
    request_id: Option<Extension<RequestId>>,
    Json(form): Json<ContractForm>,
) -> Result<Json<ContractState>, AppError> {
    form.validate()?;
    let request = ContractRequest::from(form);

    screen::store_now(&session, CONTRACT_KEY, &ContractState::Loading).await?;

    let backends = state.backends.clone();
    let request_id = screen::request_id(&request_id).map(str::to_string);

    let view = screen::complete(&session, CONTRACT_KEY, async move {
        let result = backends
            .contract
            .generate(&request, request_id.as_deref())
            .await;
        ContractState::from_result(result)
    })
    .await?;

    Ok(Json(view))
}

pub async fn reset(session: Session) -> Result<Json<ContractState>, AppError> {
    screen::clear(&session, CONTRACT_KEY).await?;
    Ok(Json(ContractState::Idle))
}
