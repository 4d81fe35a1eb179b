//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use equiptrack_domain::error::{EquipTrackError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error side of every equipment and maintenance handler.
///
/// Validation failures and unreadable JSON bodies answer `400`. The body is
/// always `{"error": "<message>"}`; storage details are logged, never sent.
#[derive(Debug)]
pub struct ApiError(EquipTrackError);

impl From<EquipTrackError> for ApiError {
    fn from(err: EquipTrackError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "request body rejected");
        Self(ValidationError::MalformedBody(rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            EquipTrackError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            EquipTrackError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            EquipTrackError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equiptrack_domain::error::NotFoundError;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_render_bad_request_when_validation_fails() {
        let (status, body) = render(ValidationError::EmptyName.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name is required.");
    }

    #[tokio::test]
    async fn should_render_not_found_with_message() {
        let err: EquipTrackError = NotFoundError {
            entity: "Equipment",
            id: "3".to_string(),
        }
        .into();
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Equipment not found with id: 3");
    }

    #[tokio::test]
    async fn should_hide_details_when_storage_fails() {
        let err = EquipTrackError::Storage("disk on fire".into());
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal server error");
    }
}
