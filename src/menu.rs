//! Navigation menu metadata and the tree the menu renderer consumes.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::auth::{self, Authorizer};
use crate::descriptor::RouteDescriptor;
use crate::i18n::LabelResolver;

/// Where a route appears in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    id: String,
    label_key: String,
    path: String,
    order: u32,
    parent: Option<String>,
}

impl MenuMeta {
    pub(crate) fn new(
        id: String,
        label_key: String,
        path: String,
        order: u32,
        parent: Option<String>,
    ) -> Self {
        MenuMeta {
            id,
            label_key,
            path,
            order,
            parent,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Only meaningful relative to siblings under the same parent.
    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }
}

/// A top-level navigation group such as "model management".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: String,
    pub label_key: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    pub path: Option<String>,
    pub order: u32,
    pub children: Vec<MenuNode>,
}

fn by_order(a: &MenuNode, b: &MenuNode) -> Ordering {
    a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuTree {
    pub groups: Vec<MenuNode>,
}

impl MenuTree {
    /// Builds the menu a principal sees.
    ///
    /// Routes without a menu block are skipped, as are routes the
    /// authorizer rejects. Groups with no visible entries are dropped.
    pub fn build<'a>(
        groups: &[MenuGroup],
        routes: impl IntoIterator<Item = &'a RouteDescriptor>,
        authorizer: &dyn Authorizer,
        labels: &dyn LabelResolver,
        locale: &str,
    ) -> Self {
        let mut children: HashMap<&str, Vec<MenuNode>> = HashMap::new();

        for route in routes {
            let Some(menu) = route.menu() else {
                continue;
            };
            if !auth::permits(authorizer, route.auth()) {
                tracing::debug!(route = route.name(), "menu entry hidden by authorization");
                continue;
            }
            let Some(parent) = menu.parent() else {
                tracing::warn!(route = route.name(), "menu entry has no parent group, skipping");
                continue;
            };
            let Some(group) = groups.iter().find(|g| g.id == parent) else {
                tracing::warn!(
                    route = route.name(),
                    parent,
                    "menu entry references unknown group, skipping"
                );
                continue;
            };

            children.entry(group.id.as_str()).or_default().push(MenuNode {
                id: menu.id().to_string(),
                label: labels.resolve(menu.label_key(), locale),
                path: Some(menu.path().to_string()),
                order: menu.order(),
                children: Vec::new(),
            });
        }

        let mut nodes: Vec<MenuNode> = groups
            .iter()
            .filter_map(|group| {
                let mut entries = children.remove(group.id.as_str())?;
                entries.sort_by(by_order);
                Some(MenuNode {
                    id: group.id.clone(),
                    label: labels.resolve(&group.label_key, locale),
                    path: None,
                    order: group.order,
                    children: entries,
                })
            })
            .collect();
        nodes.sort_by(by_order);

        MenuTree { groups: nodes }
    }
}
