//! Route declarations for every page the application registers.

pub mod model_topology;

use anyhow::Result;

use crate::config::NavConfig;
use crate::descriptor::RouteDescriptor;
use crate::menu::MenuGroup;

pub use model_topology::model_topology;

pub fn all(nav: &NavConfig) -> Result<Vec<RouteDescriptor>> {
    Ok(vec![model_topology(nav)?])
}

/// Navigation groups page menus attach to.
pub fn menu_groups(nav: &NavConfig) -> Vec<MenuGroup> {
    vec![MenuGroup {
        id: nav.model_management_group.clone(),
        label_key: r#"Nav["模型管理"]"#.to_string(),
        order: 3,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_parent_is_a_known_group() {
        let nav = NavConfig::default();
        let groups = menu_groups(&nav);
        for route in all(&nav).unwrap() {
            if let Some(parent) = route.menu().and_then(|m| m.parent()) {
                assert!(groups.iter().any(|g| g.id == parent), "{} has unknown parent", route.name());
            }
        }
    }

    #[test]
    fn test_paths_are_absolute_and_unique() {
        let routes = all(&NavConfig::default()).unwrap();
        let mut paths: Vec<&str> = routes.iter().map(|r| r.path()).collect();
        assert!(paths.iter().all(|p| p.starts_with('/') && p.len() > 1));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), routes.len());
    }
}
