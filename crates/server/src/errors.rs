use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": "...", "message": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.error, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Errors returned by the employee handlers.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with an empty body.
    NotFound,
    Json(JsonApiError),
}

impl ApiError {
    /// Metrics label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::NotFound => "not_found",
            ApiError::Json(e) if e.status == StatusCode::BAD_REQUEST => "invalid",
            ApiError::Json(_) => "error",
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Validation(msg) => {
                ApiError::Json(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)))
            }
            other => {
                error!(err = %other, "employee directory operation failed");
                ApiError::Json(JsonApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some(other.to_string()),
                ))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Json(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_bare_404() {
        let err: ApiError = ServiceError::not_found("employee").into();
        assert_eq!(err.outcome(), "not_found");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err: ApiError = ServiceError::Validation("name required".into()).into();
        assert_eq!(err.outcome(), "invalid");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_failures_map_to_500() {
        let err: ApiError = ServiceError::Db("connection refused".into()).into();
        assert_eq!(err.outcome(), "error");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
