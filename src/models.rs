use serde::{Deserialize, Serialize};

use crate::descriptor::{RouteDescriptor, ViewComponent};
use crate::menu::{MenuNode, MenuTree};

/// Menu placement of a route
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub id: String,
    pub label_key: String,
    pub path: String,
    pub order: u32,
    pub parent: Option<String>,
}

/// Operations required to access a route
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub operations: Vec<String>,
}

/// A registered route descriptor
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteResponse {
    pub name: String,
    pub path: String,
    pub menu: Option<MenuResponse>,
    pub auth: Option<AuthResponse>,
}

impl From<&RouteDescriptor> for RouteResponse {
    fn from(route: &RouteDescriptor) -> Self {
        RouteResponse {
            name: route.name().to_string(),
            path: route.path().to_string(),
            menu: route.menu().map(|menu| MenuResponse {
                id: menu.id().to_string(),
                label_key: menu.label_key().to_string(),
                path: menu.path().to_string(),
                order: menu.order(),
                parent: menu.parent().map(str::to_string),
            }),
            auth: route.auth().map(|auth| AuthResponse {
                operations: auth.operations().iter().map(|op| op.to_string()).collect(),
            }),
        }
    }
}

/// Query parameters for the route list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RouteListQuery {
    pub path: Option<String>,
}

/// Response type for the route list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RouteListResponse {
    pub data: Vec<RouteResponse>,
    pub total_count: usize,
}

/// A route's resolved view component
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ComponentResponse {
    pub route: String,
    pub module: String,
    pub chunk: String,
}

impl ComponentResponse {
    pub fn new(route: &str, component: &ViewComponent) -> Self {
        ComponentResponse {
            route: route.to_string(),
            module: component.module.clone(),
            chunk: component.chunk.clone(),
        }
    }
}

/// Query parameters for the menu endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct MenuQuery {
    pub operations: Option<String>,
    pub locale: Option<String>,
}

/// A leaf entry in the navigation menu
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MenuEntryResponse {
    pub id: String,
    pub label: String,
    pub path: Option<String>,
    pub order: u32,
}

/// A navigation group and its visible entries
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MenuGroupResponse {
    pub id: String,
    pub label: String,
    pub order: u32,
    pub entries: Vec<MenuEntryResponse>,
}

/// Response type for the menu endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MenuTreeResponse {
    pub locale: String,
    pub groups: Vec<MenuGroupResponse>,
}

impl MenuTreeResponse {
    pub fn new(locale: &str, tree: MenuTree) -> Self {
        let entry = |node: MenuNode| MenuEntryResponse {
            id: node.id,
            label: node.label,
            path: node.path,
            order: node.order,
        };

        MenuTreeResponse {
            locale: locale.to_string(),
            groups: tree
                .groups
                .into_iter()
                .map(|group| MenuGroupResponse {
                    id: group.id,
                    label: group.label,
                    order: group.order,
                    entries: group.children.into_iter().map(entry).collect(),
                })
                .collect(),
        }
    }
}
