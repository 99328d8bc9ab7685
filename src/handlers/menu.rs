use crate::auth::{AllowAll, Authorizer, GrantedOperations};
use crate::error::{ApiError, ErrorResponse};
use crate::menu::MenuTree;
use crate::models::{MenuQuery, MenuTreeResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /menu handler - Navigation menu for a principal
///
/// Query parameters:
/// - operations: comma separated operations granted to the principal (optional, default: none)
/// - locale: label locale (optional, default: the configured locale)
///
/// Entries whose required operations are not all granted are left out, and
/// so are groups left empty. With authorization disabled every entry is shown.
#[utoipa::path(
    get,
    path = routes::MENU,
    params(
        ("operations" = Option<String>, Query, description = "Comma separated granted operations"),
        ("locale" = Option<String>, Query, description = "Label locale, e.g. zh_CN or en")
    ),
    responses(
        (status = 200, description = "Visible navigation menu", body = MenuTreeResponse),
        (status = 400, description = "Unknown operation", body = ErrorResponse)
    ),
    tag = "menu"
)]
pub async fn menu_handler(
    State(state): State<AppState>,
    Query(query): Query<MenuQuery>,
) -> Result<(StatusCode, Json<MenuTreeResponse>), ApiError> {
    let mut granted = Vec::new();
    for token in query
        .operations
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        match state.nav.operations.lookup(token) {
            Some(operation) => granted.push(operation.clone()),
            None => return Err(ApiError::UnknownOperation(token.to_string())),
        }
    }

    let locale = query
        .locale
        .unwrap_or_else(|| state.config.default_locale.clone());

    let granted = GrantedOperations::new(granted);
    let authorizer: &dyn Authorizer = if state.config.auth_enabled {
        &granted
    } else {
        &AllowAll
    };

    let tree = MenuTree::build(
        &state.menu_groups,
        state.registry.iter(),
        authorizer,
        state.labels.as_ref(),
        &locale,
    );

    tracing::info!(
        "Built menu with {} groups (locale: {}, operations: {:?})",
        tree.groups.len(),
        locale,
        query.operations
    );

    Ok((StatusCode::OK, Json(MenuTreeResponse::new(&locale, tree))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::test_config;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn get_menu(uri: &str) -> (StatusCode, axum::body::Bytes) {
        get_menu_with(test_config(), uri).await
    }

    async fn get_menu_with(config: Config, uri: &str) -> (StatusCode, axum::body::Bytes) {
        let state = AppState::from_config(config).unwrap();
        let app = Router::new()
            .route(crate::routes::MENU, get(menu_handler))
            .with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_menu_with_granted_operation() {
        let (status, body) = get_menu("/menu?operations=SYSTEM_MODEL_GRAPHICS").await;

        assert_eq!(status, StatusCode::OK);
        let menu: MenuTreeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(menu.locale, "zh_CN");
        assert_eq!(menu.groups.len(), 1);
        assert_eq!(menu.groups[0].id, "modelManagement");
        assert_eq!(menu.groups[0].label, "模型管理");
        assert_eq!(menu.groups[0].entries[0].id, "modelTopology");
        assert_eq!(menu.groups[0].entries[0].label, "模型拓扑");
        assert_eq!(menu.groups[0].entries[0].path.as_deref(), Some("/model/topology"));
        assert_eq!(menu.groups[0].entries[0].order, 2);
    }

    #[tokio::test]
    async fn test_menu_in_english() {
        let (status, body) = get_menu("/menu?operations=C_MODEL,SYSTEM_MODEL_GRAPHICS&locale=en").await;

        assert_eq!(status, StatusCode::OK);
        let menu: MenuTreeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(menu.groups[0].label, "Model Management");
        assert_eq!(menu.groups[0].entries[0].label, "Model Topology");
    }

    #[tokio::test]
    async fn test_menu_without_operations_hides_guarded_routes() {
        let (status, body) = get_menu("/menu").await;

        assert_eq!(status, StatusCode::OK);
        let menu: MenuTreeResponse = serde_json::from_slice(&body).unwrap();
        assert!(menu.groups.is_empty());
    }

    #[tokio::test]
    async fn test_menu_shows_everything_when_auth_disabled() {
        let config = Config {
            auth_enabled: false,
            ..test_config()
        };
        let (status, body) = get_menu_with(config, "/menu").await;

        assert_eq!(status, StatusCode::OK);
        let menu: MenuTreeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(menu.groups.len(), 1);
        assert_eq!(menu.groups[0].entries[0].id, "modelTopology");
    }

    #[tokio::test]
    async fn test_menu_unknown_operation() {
        let (status, body) = get_menu("/menu?operations=NOT_AN_OPERATION").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("NOT_AN_OPERATION"));
    }
}
