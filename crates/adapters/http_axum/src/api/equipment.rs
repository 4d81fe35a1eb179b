//! JSON REST handlers for equipment.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use equiptrack_app::ports::{
    Clock, EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};
use equiptrack_domain::equipment::{Equipment, EquipmentInput};
use equiptrack_domain::equipment_type::EquipmentType;
use equiptrack_domain::error::ValidationError;
use equiptrack_domain::query::{EquipmentQuery, Page};

use super::parse_equipment_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the list endpoint.
///
/// Every value is taken as text so malformed input is reported as a
/// validation error with the usual JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListParams {
    /// Convert into a domain query, falling back to defaults for absent values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first malformed parameter.
    pub fn into_query(self) -> Result<EquipmentQuery, ValidationError> {
        let mut query = EquipmentQuery::default();
        if let Some(status) = self.status {
            query.status = status.parse()?;
        }
        if let Some(search) = self.search {
            query.search = search;
        }
        if let Some(sort) = self.sort.filter(|s| !s.trim().is_empty()) {
            query.sort_field = sort.parse()?;
        }
        if let Some(direction) = self.direction.filter(|s| !s.trim().is_empty()) {
            query.sort_direction = direction.parse()?;
        }
        if let Some(page) = self.page {
            query.page = page
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidPageNumber(page))?;
        }
        if let Some(size) = self.size {
            query.page_size = size
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidPageSize)?;
        }
        Ok(query)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Page<Equipment>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the types endpoint.
pub enum TypesResponse {
    Ok(Json<Vec<EquipmentType>>),
}

impl IntoResponse for TypesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Equipment>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Equipment>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/equipment`
pub async fn list<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    Query(params): Query<ListParams>,
) -> Result<ListResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let query = params.into_query()?;
    let page = state.equipment_service.list_equipment(&query).await?;
    Ok(ListResponse::Ok(Json(page)))
}

/// `GET /api/equipment/types`
pub async fn types<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
) -> Result<TypesResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let types = state.equipment_service.list_equipment_types().await?;
    Ok(TypesResponse::Ok(Json(types)))
}

/// `GET /api/equipment/{id}`
pub async fn get<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_equipment_id(&id)?;
    let equipment = state.equipment_service.get_equipment(id).await?;
    Ok(GetResponse::Ok(Json(equipment)))
}

/// `POST /api/equipment`
pub async fn create<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    payload: Result<Json<EquipmentInput>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(input) = payload?;
    let created = state.equipment_service.create_equipment(input).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/equipment/{id}`
pub async fn update<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    Path(id): Path<String>,
    payload: Result<Json<EquipmentInput>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_equipment_id(&id)?;
    let Json(input) = payload?;
    let updated = state.equipment_service.update_equipment(id, input).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/equipment/{id}`
pub async fn delete<ER, MR, TR, C>(
    State(state): State<AppState<ER, MR, TR, C>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_equipment_id(&id)?;
    state.equipment_service.delete_equipment(id).await?;
    Ok(DeleteResponse::NoContent)
}
