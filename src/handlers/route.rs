use crate::error::{ApiError, ErrorResponse};
use crate::models::{RouteListQuery, RouteListResponse, RouteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// GET /routes handler - List all registered route descriptors
///
/// Routes are returned in registration order.
/// Query parameters:
/// - path: only return the route registered at this URL path (optional)
#[utoipa::path(
    get,
    path = routes::ROUTE_LIST,
    params(
        ("path" = Option<String>, Query, description = "Exact route path, e.g. /model/topology")
    ),
    responses(
        (status = 200, description = "Registered routes", body = RouteListResponse)
    ),
    tag = "routes"
)]
pub async fn list_routes_handler(
    State(state): State<AppState>,
    Query(query): Query<RouteListQuery>,
) -> (StatusCode, Json<RouteListResponse>) {
    let data: Vec<RouteResponse> = match query.path.as_deref() {
        Some(path) => state
            .registry
            .get_by_path(path)
            .into_iter()
            .map(RouteResponse::from)
            .collect(),
        None => state.registry.iter().map(RouteResponse::from).collect(),
    };
    let total_count = data.len();

    tracing::info!("Listed {} routes (path: {:?})", total_count, query.path);
    (StatusCode::OK, Json(RouteListResponse { data, total_count }))
}

/// GET /routes/{name} handler - Retrieve one route descriptor
#[utoipa::path(
    get,
    path = routes::ROUTE_ITEM,
    params(
        ("name" = String, Path, description = "Route name used for programmatic navigation")
    ),
    responses(
        (status = 200, description = "Route found", body = RouteResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn get_route_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiError> {
    match state.registry.get_by_name(&name) {
        Some(route) => {
            tracing::debug!("Found route {} at {}", name, route.path());
            Ok((StatusCode::OK, Json(RouteResponse::from(route))))
        }
        None => {
            tracing::info!("Route not found: {}", name);
            Err(ApiError::RouteNotFound(name))
        }
    }
}
