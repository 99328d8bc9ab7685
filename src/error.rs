use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::registry::RegistryError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps registry and request errors to HTTP status codes with a JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered under this name
    RouteNotFound(String),
    /// Operation token not in the operation catalog
    UnknownOperation(String),
    /// The route's component loader failed
    ComponentLoad(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("Route not found: {}", name),
            ),
            ApiError::UnknownOperation(token) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: unknown operation '{}'", token),
            ),
            ApiError::ComponentLoad(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Component load error: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownRoute(name) => ApiError::RouteNotFound(name),
            other => ApiError::ComponentLoad(other.to_string()),
        }
    }
}
