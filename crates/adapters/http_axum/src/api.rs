//! JSON REST API handlers.

#[allow(clippy::missing_errors_doc)]
pub mod equipment;
#[allow(clippy::missing_errors_doc)]
pub mod maintenance;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post};

use equiptrack_app::ports::{
    Clock, EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};
use equiptrack_domain::error::ValidationError;
use equiptrack_domain::id::EquipmentId;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<ER, MR, TR, C>() -> Router<AppState<ER, MR, TR, C>>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        // Equipment
        .route(
            "/equipment",
            get(equipment::list::<ER, MR, TR, C>).post(equipment::create::<ER, MR, TR, C>),
        )
        .route("/equipment/types", get(equipment::types::<ER, MR, TR, C>))
        .route(
            "/equipment/{id}",
            get(equipment::get::<ER, MR, TR, C>)
                .put(equipment::update::<ER, MR, TR, C>)
                .delete(equipment::delete::<ER, MR, TR, C>),
        )
        // Maintenance
        .route(
            "/equipment/{id}/maintenance",
            get(maintenance::history::<ER, MR, TR, C>),
        )
        .route("/maintenance", post(maintenance::create::<ER, MR, TR, C>))
}

/// Parse an equipment id path segment.
fn parse_equipment_id(raw: &str) -> Result<EquipmentId, ApiError> {
    EquipmentId::from_str(raw)
        .map_err(|_| ApiError::from(ValidationError::InvalidId(raw.to_owned())))
}
