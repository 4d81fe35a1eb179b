//! JSON REST handlers for maintenance logs.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use equiptrack_app::ports::{
    Clock, EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};
use equiptrack_domain::maintenance::{MaintenanceInput, MaintenanceLog};

use super::parse_equipment_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<Vec<MaintenanceLog>>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<MaintenanceLog>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/equipment/{id}/maintenance`
pub async fn history<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    Path(id): Path<String>,
) -> Result<HistoryResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_equipment_id(&id)?;
    let logs = state.maintenance_service.list_maintenance_logs(id).await?;
    Ok(HistoryResponse::Ok(Json(logs)))
}

/// `POST /api/maintenance`
pub async fn create<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    payload: Result<Json<MaintenanceInput>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(input) = payload?;
    let log = state.maintenance_service.log_maintenance(input).await?;
    Ok(CreateResponse::Created(Json(log)))
}
