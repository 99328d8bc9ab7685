use crate::error::{ApiError, ErrorResponse};
use crate::models::ComponentResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /routes/{name}/component handler - Resolve a route's lazy view
///
/// The loader runs on the first request only; later requests are served
/// from the registry's cache.
#[utoipa::path(
    get,
    path = routes::ROUTE_COMPONENT,
    params(
        ("name" = String, Path, description = "Route name")
    ),
    responses(
        (status = 200, description = "Component resolved", body = ComponentResponse),
        (status = 404, description = "Route not found", body = ErrorResponse),
        (status = 500, description = "Component loader failed", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn component_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<ComponentResponse>), ApiError> {
    let component = state.registry.resolve_component(&name).await.map_err(|e| {
        tracing::warn!("Failed to resolve component for {}: {}", name, e);
        ApiError::from(e)
    })?;

    tracing::info!("Resolved component for {}: {}", name, component.module);
    Ok((StatusCode::OK, Json(ComponentResponse::new(&name, component))))
}
