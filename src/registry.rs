//! Route registry: descriptors keyed by path and name, with lazily
//! resolved and cached view components.

use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::descriptor::{RouteDescriptor, ViewComponent};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("route path '{path}' is already registered by '{existing}'")]
    DuplicatePath { path: String, existing: String },

    #[error("route name '{name}' is already registered for path '{existing_path}'")]
    DuplicateName { name: String, existing_path: String },

    #[error("no route named '{0}'")]
    UnknownRoute(String),

    #[error("route '{name}': failed to load component: {source}")]
    LoadFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

struct Entry {
    descriptor: RouteDescriptor,
    component: OnceCell<ViewComponent>,
}

/// Registered routes, in registration order.
#[derive(Default)]
pub struct RouteRegistry {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    by_path: HashMap<String, usize>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = RouteDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        info!(routes = registry.len(), "route registry built");
        Ok(registry)
    }

    /// Adds a route. Paths and names must both be unique.
    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<(), RegistryError> {
        if let Some(&idx) = self.by_path.get(descriptor.path()) {
            return Err(RegistryError::DuplicatePath {
                path: descriptor.path().to_string(),
                existing: self.entries[idx].descriptor.name().to_string(),
            });
        }
        if let Some(&idx) = self.by_name.get(descriptor.name()) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name().to_string(),
                existing_path: self.entries[idx].descriptor.path().to_string(),
            });
        }

        debug!(name = descriptor.name(), path = descriptor.path(), "registering route");
        let idx = self.entries.len();
        self.by_name.insert(descriptor.name().to_string(), idx);
        self.by_path.insert(descriptor.path().to_string(), idx);
        self.entries.push(Entry {
            descriptor,
            component: OnceCell::new(),
        });
        Ok(())
    }

    pub fn get_by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].descriptor)
    }

    pub fn get_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.by_path.get(path).map(|&idx| &self.entries[idx].descriptor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the route's view, running its loader on first use only.
    ///
    /// Concurrent first calls share one load. A failed load is not cached.
    pub async fn resolve_component(&self, name: &str) -> Result<&ViewComponent, RegistryError> {
        let idx = *self
            .by_name
            .get(name)
            .ok_or_else(|| RegistryError::UnknownRoute(name.to_string()))?;
        let entry = &self.entries[idx];

        entry
            .component
            .get_or_try_init(|| async {
                debug!(route = name, "loading component");
                entry.descriptor.component().load().await
            })
            .await
            .map_err(|source| RegistryError::LoadFailed {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ComponentLoader;
    use crate::operation::OperationCatalog;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn route(name: &str, path: &str) -> RouteDescriptor {
        RouteDescriptor::builder(name, path, ComponentLoader::module(format!("views/{name}.vue"), name))
            .build(&OperationCatalog::default())
            .unwrap()
    }

    fn counting_route(name: &str, calls: Arc<AtomicUsize>, fail_first: bool) -> RouteDescriptor {
        let loader = ComponentLoader::new(move || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if fail_first && n == 0 {
                    anyhow::bail!("chunk fetch failed");
                }
                Ok(ViewComponent {
                    module: "views/counted.vue".into(),
                    chunk: "counted".into(),
                })
            }
        });
        RouteDescriptor::builder(name, format!("/{name}"), loader)
            .build(&OperationCatalog::default())
            .unwrap()
    }

    #[test]
    fn test_lookup_by_name_and_path() {
        let registry = RouteRegistry::from_descriptors([route("a", "/a"), route("b", "/b")]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_by_name("b").unwrap().path(), "/b");
        assert_eq!(registry.get_by_path("/a").unwrap().name(), "a");
        assert!(registry.get_by_name("c").is_none());
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let registry =
            RouteRegistry::from_descriptors([route("z", "/z"), route("a", "/a"), route("m", "/m")]).unwrap();
        let names: Vec<&str> = registry.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut registry = RouteRegistry::new();
        registry.register(route("a", "/same")).unwrap();
        let err = registry.register(route("b", "/same")).unwrap_err();

        assert!(matches!(err, RegistryError::DuplicatePath { .. }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_by_path("/same").unwrap().name(), "a");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteRegistry::from_descriptors([route("a", "/one"), route("a", "/two")])
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "route name 'a' is already registered for path '/one'"
        );
    }

    #[tokio::test]
    async fn test_component_loaded_once_and_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry =
            RouteRegistry::from_descriptors([counting_route("counted", calls.clone(), false)]).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let first = registry.resolve_component("counted").await.unwrap().clone();
        let second = registry.resolve_component("counted").await.unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(first.module, "views/counted.vue");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_resolutions_share_one_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let loader = ComponentLoader::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                Ok::<_, anyhow::Error>(ViewComponent {
                    module: "views/slow.vue".into(),
                    chunk: "slow".into(),
                })
            }
        });
        let slow = RouteDescriptor::builder("slow", "/slow", loader)
            .build(&OperationCatalog::default())
            .unwrap();
        let registry = Arc::new(RouteRegistry::from_descriptors([slow]).unwrap());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry.resolve_component("slow").await.map(|c| c.clone())
                })
            })
            .collect();

        for task in tasks {
            let component = task.await.unwrap().unwrap();
            assert_eq!(component.module, "views/slow.vue");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry =
            RouteRegistry::from_descriptors([counting_route("flaky", calls.clone(), true)]).unwrap();

        let err = registry.resolve_component("flaky").await.unwrap_err();
        assert!(err.to_string().contains("chunk fetch failed"));

        registry.resolve_component("flaky").await.unwrap();
        registry.resolve_component("flaky").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_component() {
        let registry = RouteRegistry::new();
        let err = registry.resolve_component("missing").await.unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRoute(name) if name == "missing"));
    }
}
