use crate::config::{Config, NavConfig};
use crate::i18n::LabelResolver;
use crate::menu::MenuGroup;
use crate::registry::RouteRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RouteRegistry>,
    pub menu_groups: Arc<Vec<MenuGroup>>,
    pub labels: Arc<dyn LabelResolver>,
    pub nav: Arc<NavConfig>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Registers every page declared for `config` and assembles the state.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let nav = config.nav();
        let registry = RouteRegistry::from_descriptors(crate::pages::all(&nav)?)?;
        let menu_groups = crate::pages::menu_groups(&nav);

        Ok(AppState {
            registry: Arc::new(registry),
            menu_groups: Arc::new(menu_groups),
            labels: Arc::new(crate::i18n::StaticLabels::builtin()),
            nav: Arc::new(nav),
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
        model_management_group: "modelManagement".to_string(),
        default_locale: "zh_CN".to_string(),
        extra_operations: Vec::new(),
        auth_enabled: true,
    }
}
