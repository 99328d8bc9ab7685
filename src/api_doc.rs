use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    AuthResponse, ComponentResponse, MenuEntryResponse, MenuGroupResponse, MenuResponse,
    MenuTreeResponse, RouteListResponse, RouteResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "nav-registry API",
        version = "1.0.0",
        description = "Front-end route descriptors, lazy view resolution and permission-filtered navigation menus"
    ),
    paths(
        handlers::health::health_handler,
        handlers::route::list_routes_handler,
        handlers::route::get_route_handler,
        handlers::component::component_handler,
        handlers::menu::menu_handler
    ),
    components(
        schemas(
            RouteResponse,
            RouteListResponse,
            MenuResponse,
            AuthResponse,
            ComponentResponse,
            MenuTreeResponse,
            MenuGroupResponse,
            MenuEntryResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Registered route descriptors"),
        (name = "menu", description = "Navigation menu")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            crate::routes::HEALTH,
            crate::routes::ROUTE_LIST,
            crate::routes::ROUTE_ITEM,
            crate::routes::ROUTE_COMPONENT,
            crate::routes::MENU,
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
