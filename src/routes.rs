// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const ROUTE_LIST: &str = "/routes";
pub const ROUTE_ITEM: &str = "/routes/{name}";
pub const ROUTE_COMPONENT: &str = "/routes/{name}/component";
pub const MENU: &str = "/menu";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
