//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use equiptrack_app::ports::{
    Clock, EquipmentRepository, EquipmentTypeRepository, MaintenanceLogRepository,
};

use crate::state::AppState;

/// Build the equipment tracking [`Router`].
///
/// Serves the equipment listing, CRUD and type catalog under
/// `/api/equipment`, maintenance logging under `/api/maintenance` and a
/// liveness check at `GET /health`. Requests are traced through
/// [`TraceLayer`].
pub fn build<ER, MR, TR, C>(state: AppState<ER, MR, TR, C>) -> Router
where
    ER: EquipmentRepository + Send + Sync + 'static,
    MR: MaintenanceLogRepository + Send + Sync + 'static,
    TR: EquipmentTypeRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use equiptrack_app::clock::ReferenceClock;
    use equiptrack_app::services::equipment_service::EquipmentService;
    use equiptrack_app::services::maintenance_service::MaintenanceService;
    use equiptrack_domain::equipment::{Equipment, EquipmentDraft};
    use equiptrack_domain::equipment_type::{EquipmentType, default_catalog};
    use equiptrack_domain::error::{EquipTrackError, NotFoundError};
    use equiptrack_domain::id::{EquipmentId, EquipmentTypeId};
    use equiptrack_domain::maintenance::{MaintenanceDraft, MaintenanceLog};
    use equiptrack_domain::time::Date;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct StubEquipmentRepo;
    struct StubLogRepo;
    struct StubTypeRepo;

    impl EquipmentRepository for StubEquipmentRepo {
        async fn create(&self, draft: EquipmentDraft) -> Result<Equipment, EquipTrackError> {
            Ok(Equipment::from_draft(EquipmentId::new(1), draft))
        }
        async fn get_by_id(&self, _id: EquipmentId) -> Result<Option<Equipment>, EquipTrackError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Equipment>, EquipTrackError> {
            Ok(vec![])
        }
        async fn update(&self, equipment: Equipment) -> Result<Equipment, EquipTrackError> {
            Ok(equipment)
        }
        async fn delete(&self, _id: EquipmentId) -> Result<usize, EquipTrackError> {
            Ok(0)
        }
    }

    impl MaintenanceLogRepository for StubLogRepo {
        async fn record(
            &self,
            draft: MaintenanceDraft,
        ) -> Result<(MaintenanceLog, Equipment), EquipTrackError> {
            Err(NotFoundError {
                entity: "Equipment",
                id: draft.equipment_id().to_string(),
            }
            .into())
        }
        async fn find_by_equipment(
            &self,
            _equipment_id: EquipmentId,
        ) -> Result<Vec<MaintenanceLog>, EquipTrackError> {
            Ok(vec![])
        }    }

    impl EquipmentTypeRepository for StubTypeRepo {
        async fn get_all(&self) -> Result<Vec<EquipmentType>, EquipTrackError> {
            Ok(default_catalog())
        }
        async fn get_by_id(
            &self,
            id: EquipmentTypeId,
        ) -> Result<Option<EquipmentType>, EquipTrackError> {
            Ok(default_catalog().into_iter().find(|t| t.id == id))
        }
    }

    fn test_state() -> AppState<StubEquipmentRepo, StubLogRepo, StubTypeRepo, ReferenceClock> {
        let day = Date::from_ymd_opt(2026, 2, 28).unwrap();
        AppState::new(
            EquipmentService::new(StubEquipmentRepo, StubTypeRepo, ReferenceClock::Fixed(day)),
            MaintenanceService::new(StubEquipmentRepo, StubLogRepo),
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = build(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_empty_page_when_store_is_empty() {
        let (status, body) = send(get_request("/api/equipment")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"], serde_json::json!([]));
        assert_eq!(body["totalCount"], 0);
        assert_eq!(body["totalPages"], 0);
        assert_eq!(body["pageSize"], 10);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_page_size_is_zero() {
        let (status, body) = send(get_request("/api/equipment?size=0")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Page size"));
    }

    #[tokio::test]
    async fn should_return_bad_request_when_sort_field_is_unknown() {
        let (status, _) = send(get_request("/api/equipment?sort=weight")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_not_found_when_equipment_missing() {
        let (status, body) = send(get_request("/api/equipment/42")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Equipment not found with id: 42");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_numeric() {
        let (status, body) = send(get_request("/api/equipment/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }

    #[tokio::test]
    async fn should_list_catalog_when_types_requested() {
        let (status, body) = send(get_request("/api/equipment/types")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["name"], "Pump");
    }

    #[tokio::test]
    async fn should_return_created_when_equipment_is_valid() {
        let input = serde_json::json!({
            "name": "Rotary Valve Z1",
            "typeId": 6,
            "status": "Active",
            "lastCleanedDate": "2026-02-20",
        });

        let (status, body) = send(json_request("POST", "/api/equipment", &input)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["type"]["name"], "Valve");
        assert_eq!(body["lastCleanedDate"], "2026-02-20");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_active_equipment_is_stale() {
        let input = serde_json::json!({
            "name": "Rotary Valve Z1",
            "typeId": 6,
            "status": "Active",
            "lastCleanedDate": "2026-01-01",
        });

        let (status, body) = send(json_request("POST", "/api/equipment", &input)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("older than 30 days"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_logging_for_missing_equipment() {
        let input = serde_json::json!({
            "equipmentId": 9,
            "maintenanceDate": "2026-02-28",
            "performedBy": "Jane Doe",
        });

        let (status, _) = send(json_request("POST", "/api/maintenance", &input)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_empty_history_when_equipment_unknown() {
        let (status, body) = send(get_request("/api/equipment/9/maintenance")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn should_return_json_error_when_name_is_missing() {
        let input = serde_json::json!({ "typeId": 6, "status": "Inactive" });

        let (status, body) = send(json_request("POST", "/api/equipment", &input)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required.");
    }

    #[tokio::test]
    async fn should_return_json_error_when_cleaning_date_does_not_exist() {
        let input = serde_json::json!({
            "name": "Rotary Valve Z1",
            "typeId": 6,
            "status": "Inactive",
            "lastCleanedDate": "2026-02-30",
        });

        let (status, body) = send(json_request("PUT", "/api/equipment/1", &input)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn should_return_json_error_when_maintenance_body_is_not_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/maintenance")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
