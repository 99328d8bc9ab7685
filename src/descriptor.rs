//! The route descriptor: one page's path, lazy view, menu placement and
//! required operations.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::AuthMeta;
use crate::menu::MenuMeta;
use crate::operation::{OperationCatalog, OperationId};

/// The renderable unit a route's loader produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewComponent {
    /// View source, e.g. `views/model-topology/index.old.vue`.
    pub module: String,
    /// Bundle chunk the view is fetched from.
    pub chunk: String,
}

pub type LoadFuture = Pin<Box<dyn Future<Output = anyhow::Result<ViewComponent>> + Send>>;

/// Deferred factory for a route's view.
///
/// Calling the loader does nothing to the descriptor; caching the loaded
/// component is up to the registry.
#[derive(Clone)]
pub struct ComponentLoader(Arc<dyn Fn() -> LoadFuture + Send + Sync>);

impl ComponentLoader {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<ViewComponent>> + Send + 'static,
    {
        ComponentLoader(Arc::new(move || Box::pin(load())))
    }

    /// Loader for a view compiled into a named chunk.
    pub fn module(module: impl Into<String>, chunk: impl Into<String>) -> Self {
        let component = ViewComponent {
            module: module.into(),
            chunk: chunk.into(),
        };
        Self::new(move || {
            let component = component.clone();
            async move { Ok::<_, anyhow::Error>(component) }
        })
    }

    pub fn load(&self) -> LoadFuture {
        (self.0)()
    }
}

impl fmt::Debug for ComponentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComponentLoader(..)")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("route name must not be empty")]
    EmptyName,

    #[error("route '{name}': path must be non-empty and start with '/', got '{path}'")]
    InvalidPath { name: String, path: String },

    #[error("route '{name}': menu {field} must not be empty")]
    EmptyMenuField { name: String, field: &'static str },

    #[error("route '{name}': auth block declares no operations")]
    EmptyOperations { name: String },

    #[error("route '{name}': requires unknown operation '{operation}'")]
    UnknownOperation { name: String, operation: OperationId },
}

/// A single route entry, immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    name: String,
    path: String,
    #[serde(skip)]
    component: ComponentLoader,
    menu: Option<MenuMeta>,
    auth: Option<AuthMeta>,
}

impl RouteDescriptor {
    pub fn builder(
        name: impl Into<String>,
        path: impl Into<String>,
        component: ComponentLoader,
    ) -> RouteDescriptorBuilder {
        RouteDescriptorBuilder {
            name: name.into(),
            path: path.into(),
            component,
            menu: None,
            operations: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn component(&self) -> &ComponentLoader {
        &self.component
    }

    pub fn menu(&self) -> Option<&MenuMeta> {
        self.menu.as_ref()
    }

    pub fn auth(&self) -> Option<&AuthMeta> {
        self.auth.as_ref()
    }
}

struct MenuInput {
    id: String,
    label_key: String,
    order: u32,
    parent: Option<String>,
}

pub struct RouteDescriptorBuilder {
    name: String,
    path: String,
    component: ComponentLoader,
    menu: Option<MenuInput>,
    operations: Option<Vec<OperationId>>,
}

impl RouteDescriptorBuilder {
    /// Places the route in the menu. The menu entry links to the route's path.
    pub fn menu(
        mut self,
        id: impl Into<String>,
        label_key: impl Into<String>,
        order: u32,
        parent: Option<&str>,
    ) -> Self {
        self.menu = Some(MenuInput {
            id: id.into(),
            label_key: label_key.into(),
            order,
            parent: parent.map(str::to_string),
        });
        self
    }

    pub fn auth(mut self, operations: impl IntoIterator<Item = OperationId>) -> Self {
        self.operations = Some(operations.into_iter().collect());
        self
    }

    pub fn build(self, catalog: &OperationCatalog) -> Result<RouteDescriptor, DescriptorError> {
        let name = self.name;
        if name.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        if !self.path.starts_with('/') {
            return Err(DescriptorError::InvalidPath {
                name,
                path: self.path,
            });
        }

        let menu = match self.menu {
            Some(input) => {
                if input.id.trim().is_empty() {
                    return Err(DescriptorError::EmptyMenuField { name, field: "id" });
                }
                let label_text = crate::i18n::split_key(&input.label_key)
                    .map_or(input.label_key.as_str(), |(_, text)| text);
                if label_text.trim().is_empty() {
                    return Err(DescriptorError::EmptyMenuField {
                        name,
                        field: "label key",
                    });
                }
                if input.parent.as_deref().is_some_and(|p| p.trim().is_empty()) {
                    return Err(DescriptorError::EmptyMenuField {
                        name,
                        field: "parent",
                    });
                }
                Some(MenuMeta::new(
                    input.id,
                    input.label_key,
                    self.path.clone(),
                    input.order,
                    input.parent,
                ))
            }
            None => None,
        };

        let auth = match self.operations {
            Some(operations) => {
                if operations.is_empty() {
                    return Err(DescriptorError::EmptyOperations { name });
                }
                if let Some(unknown) = operations.iter().find(|op| !catalog.contains(op)) {
                    return Err(DescriptorError::UnknownOperation {
                        operation: unknown.clone(),
                        name,
                    });
                }
                Some(AuthMeta::new(operations.into_iter().collect::<BTreeSet<_>>()))
            }
            None => None,
        };

        Ok(RouteDescriptor {
            name,
            path: self.path,
            component: self.component,
            menu,
            auth,
        })
    }
}
